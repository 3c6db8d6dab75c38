//! Command-line interface for the Siterank engine.
#![forbid(unsafe_code)]

mod rank;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use thiserror::Error;

pub(crate) const ARG_RANK_WEIGHTS: &str = "weights";
pub(crate) const ARG_RANK_GEOJSON_DIR: &str = "geojson-dir";
pub(crate) const ENV_RANK_WEIGHTS: &str = "SITERANK_CMDS_RANK_WEIGHTS";

/// Run the Siterank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering, input
/// loading, scoring, or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "siterank",
    about = "Score and rank candidate office locations by amenity proximity",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate cities from their manifests and a weighting config.
    Rank(rank::RankArgs),
}

/// Errors emitted by the Siterank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing CLI option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// No city manifests were supplied.
    #[error("at least one city manifest is required")]
    NoManifests,
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path} does not exist")]
    MissingSourceFile {
        /// Name of the option whose path is missing.
        field: &'static str,
        /// The path that does not exist.
        path: Utf8PathBuf,
    },
    /// Loading or parsing an input file failed.
    #[error(transparent)]
    Data(#[from] siterank_data::DataError),
    /// The scoring pipeline rejected the inputs.
    #[error(transparent)]
    Score(#[from] siterank_scorer::ScoreError),
    /// Serialising a GeoJSON marker collection failed.
    #[error("failed to serialise GeoJSON for {path}")]
    SerialiseGeojson {
        /// Destination path for the GeoJSON output.
        path: Utf8PathBuf,
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },
    /// Writing a GeoJSON marker file failed.
    #[error("failed to write GeoJSON to {path}")]
    WriteGeojson {
        /// Destination path for the GeoJSON file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
