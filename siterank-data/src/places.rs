//! Parsing of places-search API responses.
//!
//! The shape mirrors the places-search v3 payload: a `results` array whose
//! entries nest the address under `location.formatted_address` and the
//! coordinates under `geocodes.main`. Every field is optional on the wire;
//! results missing anything the scorer needs are skipped with a warning and
//! counted, never silently defaulted.

use geo::Coord;
use log::warn;
use serde::Deserialize;
use siterank_core::{Category, PoiRecord};

use crate::DataError;

/// Outcome of parsing one places-search response.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPlaces {
    /// Records with a name, distance, and complete geocoding.
    pub records: Vec<PoiRecord>,
    /// Results dropped because a required field was missing.
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResponse {
    #[serde(default)]
    results: Vec<RawPlace>,
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    distance: Option<u32>,
    #[serde(default)]
    location: Option<RawLocation>,
    #[serde(default)]
    geocodes: Option<RawGeocodes>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(default)]
    formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGeocodes {
    #[serde(default)]
    main: Option<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

/// Parse a places-search response body for one category.
///
/// # Errors
/// Returns [`DataError::ParseResponse`] when the body is not valid JSON for
/// the expected shape. Individual malformed results are not errors; they are
/// skipped and counted in [`ParsedPlaces::skipped`].
pub fn parse_search_response(json: &str, category: &Category) -> Result<ParsedPlaces, DataError> {
    let raw: RawSearchResponse =
        serde_json::from_str(json).map_err(|source| DataError::ParseResponse { source })?;
    Ok(collect_places(raw, category))
}

pub(crate) fn collect_places(raw: RawSearchResponse, category: &Category) -> ParsedPlaces {
    let mut records = Vec::with_capacity(raw.results.len());
    let mut skipped = 0_usize;
    for place in raw.results {
        match place_record(place, category) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    ParsedPlaces { records, skipped }
}

fn place_record(place: RawPlace, category: &Category) -> Option<PoiRecord> {
    let Some(name) = place.name else {
        warn!("skipping unnamed {category} result");
        return None;
    };
    let Some(distance_m) = place.distance else {
        warn!("skipping {category} result '{name}' without a distance");
        return None;
    };
    let point = place.geocodes.and_then(|geocodes| geocodes.main);
    let Some(RawPoint {
        latitude: Some(latitude),
        longitude: Some(longitude),
    }) = point
    else {
        warn!("skipping {category} result '{name}' without geocodes");
        return None;
    };
    let address = place
        .location
        .and_then(|location| location.formatted_address)
        .unwrap_or_default();

    let location = Coord {
        x: longitude,
        y: latitude,
    };
    match PoiRecord::new(category.clone(), name, address, location, distance_m) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!("skipping invalid {category} result: {err}");
            None
        }
    }
}
