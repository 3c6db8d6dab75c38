//! Rank command implementation for the Siterank CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use siterank_core::CityCandidate;
use siterank_data::{LoadedCity, load_city_manifest, load_weights};
use siterank_render::{city_markers, ranking_table};
use siterank_scorer::rank_candidates;

use crate::{ARG_RANK_GEOJSON_DIR, ARG_RANK_WEIGHTS, CliError, ENV_RANK_WEIGHTS};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score each candidate city from its manifest of \
                 places-search results and competitor sites, then print the \
                 ranked table normalised against the best candidate \
                 (100 = best).",
    about = "Rank candidate cities by amenity proximity"
)]
#[ortho_config(prefix = "SITERANK")]
pub(crate) struct RankArgs {
    /// Paths to JSON city manifests, one per candidate.
    #[arg(value_name = "manifest")]
    #[serde(default)]
    pub(crate) manifests: Vec<Utf8PathBuf>,
    /// Path to the JSON category weighting configuration.
    #[arg(long = ARG_RANK_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Directory receiving one GeoJSON marker file per city.
    #[arg(long = ARG_RANK_GEOJSON_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) geojson_dir: Option<Utf8PathBuf>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Manifest path per candidate city.
    pub(crate) manifests: Vec<Utf8PathBuf>,
    /// Weighting configuration path.
    pub(crate) weights: Utf8PathBuf,
    /// Optional output directory for GeoJSON marker files.
    pub(crate) geojson_dir: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.weights, ARG_RANK_WEIGHTS)?;
        for manifest in &self.manifests {
            Self::require_existing(manifest, "manifest")?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        if args.manifests.is_empty() {
            return Err(CliError::NoManifests);
        }
        let weights = args.weights.ok_or(CliError::MissingArgument {
            field: ARG_RANK_WEIGHTS,
            env: ENV_RANK_WEIGHTS,
        })?;
        Ok(Self {
            manifests: args.manifests,
            weights,
            geojson_dir: args.geojson_dir,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let table = rank_to_table(&config)?;
    print_table(&table);
    Ok(())
}

pub(crate) fn rank_to_table(config: &RankConfig) -> Result<String, CliError> {
    let weights = load_weights(&config.weights)?;

    let mut candidates = Vec::with_capacity(config.manifests.len());
    for manifest in &config.manifests {
        let LoadedCity {
            candidate,
            skipped_records,
        } = load_city_manifest(manifest)?;
        if skipped_records > 0 {
            log::warn!(
                "{}: dropped {skipped_records} malformed place results",
                candidate.name
            );
        }
        candidates.push(candidate);
    }

    if let Some(dir) = &config.geojson_dir {
        write_geojson(dir, &candidates)?;
    }

    let ranking = rank_candidates(&candidates, &weights)?;
    Ok(ranking_table(&ranking))
}

fn write_geojson(dir: &Utf8Path, candidates: &[CityCandidate]) -> Result<(), CliError> {
    std::fs::create_dir_all(dir.as_std_path()).map_err(|source| CliError::WriteGeojson {
        path: dir.to_path_buf(),
        source,
    })?;
    for candidate in candidates {
        let path = dir.join(format!("{}.geojson", candidate.name));
        let markers = city_markers(candidate);
        let body = serde_json::to_vec_pretty(&markers).map_err(|source| {
            CliError::SerialiseGeojson {
                path: path.clone(),
                source,
            }
        })?;
        std::fs::write(path.as_std_path(), body).map_err(|source| CliError::WriteGeojson {
            path,
            source,
        })?;
    }
    Ok(())
}

#[expect(
    clippy::print_stdout,
    reason = "the ranked table is the command's primary output"
)]
fn print_table(table: &str) {
    print!("{table}");
}
