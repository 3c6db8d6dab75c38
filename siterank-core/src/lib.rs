//! Core domain types for the Siterank engine.
//!
//! Siterank compares candidate office locations by how close each one sits
//! to the amenities a company cares about. This crate defines the typed
//! records the pipeline operates on and the great-circle distance helper.
//! The models validate on construction to keep downstream components
//! honest; constructors return `Result` to surface invalid input early.
//!
//! Coordinates are WGS84 [`geo::Coord`] values with `x = longitude` and
//! `y = latitude`.

#![forbid(unsafe_code)]

mod category;
mod city;
mod distance;
mod poi;

pub use category::{
    Category, CategoryError, CategoryParams, CategoryParamsError, CategoryWeights,
    CategoryWeightsError,
};
pub use city::{CityCandidate, CityCandidateError};
pub use distance::{EARTH_RADIUS_M, haversine_distance_m};
pub use poi::{CompetitorSite, CompetitorSiteError, PoiRecord, PoiRecordError};
