//! Candidate city locations under comparison.

use geo::Coord;
use thiserror::Error;

use crate::{CompetitorSite, PoiRecord};

/// One candidate office location and everything retrieved for it.
///
/// The origin is the prospective office coordinate; `pois` holds the records
/// returned by the places-search collaborator for every queried category and
/// `competitors` the raw company records used to synthesise the
/// "companies nearby" category.
#[derive(Debug, Clone, PartialEq)]
pub struct CityCandidate {
    /// Identifying label, e.g. the city name.
    pub name: String,
    /// Prospective office coordinate.
    pub origin: Coord,
    /// POI records retrieved for the candidate, all categories together.
    pub pois: Vec<PoiRecord>,
    /// Competitor company sites near the candidate.
    pub competitors: Vec<CompetitorSite>,
}

/// Errors returned by [`CityCandidate::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CityCandidateError {
    /// The candidate name was empty or whitespace.
    #[error("city candidate must have a name")]
    EmptyName,
    /// An origin coordinate component was NaN or infinite.
    #[error("city candidate origin must be finite")]
    NonFiniteOrigin,
}

impl CityCandidate {
    /// Validates and constructs a [`CityCandidate`].
    pub fn new(
        name: impl Into<String>,
        origin: Coord,
        pois: Vec<PoiRecord>,
        competitors: Vec<CompetitorSite>,
    ) -> Result<Self, CityCandidateError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CityCandidateError::EmptyName);
        }
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(CityCandidateError::NonFiniteOrigin);
        }
        Ok(Self {
            name,
            origin,
            pois,
            competitors,
        })
    }
}
