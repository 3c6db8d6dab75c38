//! Input-side collaborators for the Siterank engine.
//!
//! Responsibilities:
//! - Parse places-search API responses into typed POI records.
//! - Load weighting configurations, competitor datasets, and city manifests
//!   from JSON files.
//! - Encapsulate the wire and file formats so `siterank-core` stays free of
//!   serialization concerns.
//!
//! Boundaries:
//! - No HTTP: request construction, authentication, and rate limits belong
//!   to whatever fetched the JSON.
//! - No scoring: files load into domain types and stop there.

#![forbid(unsafe_code)]

mod places;

pub use places::{ParsedPlaces, parse_search_response};

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use serde::Deserialize;
use siterank_core::{
    Category, CategoryError, CategoryParams, CategoryParamsError, CategoryWeights,
    CategoryWeightsError, CityCandidate, CityCandidateError, CompetitorSite, CompetitorSiteError,
};
use thiserror::Error;

/// Errors returned when loading Siterank input files.
#[derive(Debug, Error)]
pub enum DataError {
    /// Reading an input file failed.
    #[error("failed to read {path}")]
    ReadFile {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A file held syntactically invalid JSON or the wrong shape.
    #[error("failed to parse JSON in {path}")]
    ParseFile {
        /// Offending file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A places-search response body was not valid JSON.
    #[error("failed to parse places-search response")]
    ParseResponse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A category label in a weights file or manifest was invalid.
    #[error("invalid category label '{label}'")]
    InvalidCategory {
        /// Offending label.
        label: String,
        /// Source validation error.
        #[source]
        source: CategoryError,
    },
    /// A category's weighting parameters were invalid.
    #[error("invalid weighting parameters for category '{category}'")]
    InvalidParams {
        /// Category whose parameters failed validation.
        category: String,
        /// Source validation error.
        #[source]
        source: CategoryParamsError,
    },
    /// The weighting configuration as a whole was unusable.
    #[error("invalid weighting configuration in {path}")]
    InvalidWeights {
        /// Offending file path.
        path: Utf8PathBuf,
        /// Source validation error.
        #[source]
        source: CategoryWeightsError,
    },
    /// A competitor record failed domain validation.
    #[error("invalid competitor record '{name}'")]
    InvalidCompetitor {
        /// Offending company name.
        name: String,
        /// Source validation error.
        #[source]
        source: CompetitorSiteError,
    },
    /// The city candidate assembled from a manifest failed validation.
    #[error("invalid city candidate '{name}'")]
    InvalidCity {
        /// Offending city name.
        name: String,
        /// Source validation error.
        #[source]
        source: CityCandidateError,
    },
}

#[derive(Debug, Deserialize)]
struct RawParams {
    weight: f64,
    default_radius_m: f64,
}

#[derive(Debug, Deserialize)]
struct RawCompetitor {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct RawOrigin {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    name: String,
    origin: RawOrigin,
    #[serde(default)]
    places: BTreeMap<String, places::RawSearchResponse>,
    #[serde(default)]
    competitors: Vec<RawCompetitor>,
}

/// A city candidate loaded from a manifest, with its skip tally.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCity {
    /// The assembled candidate.
    pub candidate: CityCandidate,
    /// Place results dropped across all categories for missing fields.
    pub skipped_records: usize,
}

/// Load the category weighting configuration from a JSON file.
///
/// The expected shape is a map from category label to
/// `{"weight": .., "default_radius_m": ..}`.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or parsed, or when a
/// label or parameter pair fails domain validation.
pub fn load_weights(path: &Utf8Path) -> Result<CategoryWeights, DataError> {
    let raw: BTreeMap<String, RawParams> = read_json(path)?;
    let mut params = BTreeMap::new();
    for (label, entry) in raw {
        let category = Category::new(label.clone())
            .map_err(|source| DataError::InvalidCategory { label: label.clone(), source })?;
        let validated = CategoryParams::new(entry.weight, entry.default_radius_m)
            .map_err(|source| DataError::InvalidParams { category: label, source })?;
        params.insert(category, validated);
    }
    CategoryWeights::new(params).map_err(|source| DataError::InvalidWeights {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a competitor dataset from a JSON file.
///
/// The expected shape is an array of `{"name", "latitude", "longitude"}`
/// records. Competitor files are tabular exports, so a malformed record
/// fails the whole file rather than being skipped.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or parsed, or when a
/// record fails domain validation.
pub fn load_competitors(path: &Utf8Path) -> Result<Vec<CompetitorSite>, DataError> {
    let raw: Vec<RawCompetitor> = read_json(path)?;
    raw.into_iter().map(competitor_site).collect()
}

/// Load one candidate city from a manifest file.
///
/// A manifest bundles the candidate name, origin coordinate, one
/// places-search response per category, and the competitor dataset:
///
/// ```json
/// {
///   "name": "Barcelona",
///   "origin": {"latitude": 41.3851, "longitude": 2.1734},
///   "places": {"school": {"results": [...]}},
///   "competitors": [{"name": "...", "latitude": ..., "longitude": ...}]
/// }
/// ```
///
/// Malformed place results are skipped with a warning and tallied in
/// [`LoadedCity::skipped_records`].
///
/// # Errors
/// Returns [`DataError`] when the file cannot be read or parsed, or when a
/// label, competitor, or the assembled candidate fails validation.
pub fn load_city_manifest(path: &Utf8Path) -> Result<LoadedCity, DataError> {
    let raw: RawManifest = read_json(path)?;
    let origin = Coord {
        x: raw.origin.longitude,
        y: raw.origin.latitude,
    };

    let mut pois = Vec::new();
    let mut skipped_records = 0_usize;
    for (label, response) in raw.places {
        let category = Category::new(label.clone())
            .map_err(|source| DataError::InvalidCategory { label, source })?;
        let parsed = places::collect_places(response, &category);
        skipped_records += parsed.skipped;
        pois.extend(parsed.records);
    }
    let competitors = raw
        .competitors
        .into_iter()
        .map(competitor_site)
        .collect::<Result<Vec<_>, _>>()?;

    let candidate = CityCandidate::new(raw.name.clone(), origin, pois, competitors)
        .map_err(|source| DataError::InvalidCity { name: raw.name, source })?;
    Ok(LoadedCity {
        candidate,
        skipped_records,
    })
}

fn competitor_site(raw: RawCompetitor) -> Result<CompetitorSite, DataError> {
    let location = Coord {
        x: raw.longitude,
        y: raw.latitude,
    };
    CompetitorSite::new(raw.name.clone(), location)
        .map_err(|source| DataError::InvalidCompetitor { name: raw.name, source })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, DataError> {
    let text = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        DataError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}
