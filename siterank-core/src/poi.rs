//! Point-of-interest and competitor records.

use geo::Coord;
use thiserror::Error;

use crate::Category;

/// A place returned by a places-search query, tagged with its category.
///
/// Records are immutable once created; the distance from the query origin is
/// computed upstream (by the places API or [`crate::haversine_distance_m`])
/// and carried along rather than recomputed.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use siterank_core::{Category, PoiRecord};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let record = PoiRecord::new(
///     Category::new("school")?,
///     "Institut Jaume Balmes",
///     "Carrer de Pau Claris 121",
///     Coord { x: 2.1686, y: 41.3919 },
///     740,
/// )?;
/// assert_eq!(record.distance_m, 740);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PoiRecord {
    /// Category the place was queried under.
    pub category: Category,
    /// Place name.
    pub name: String,
    /// Formatted street address; may be empty when the source omits it.
    pub address: String,
    /// Geocoded position.
    pub location: Coord,
    /// Distance from the query origin in whole metres.
    pub distance_m: u32,
}

/// Errors returned by [`PoiRecord::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoiRecordError {
    /// The place name was empty or whitespace.
    #[error("POI record must have a name")]
    EmptyName,
    /// A coordinate component was NaN or infinite.
    #[error("POI record coordinates must be finite")]
    NonFiniteCoordinate,
}

impl PoiRecord {
    /// Validates and constructs a [`PoiRecord`].
    pub fn new(
        category: Category,
        name: impl Into<String>,
        address: impl Into<String>,
        location: Coord,
        distance_m: u32,
    ) -> Result<Self, PoiRecordError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PoiRecordError::EmptyName);
        }
        if !location.x.is_finite() || !location.y.is_finite() {
            return Err(PoiRecordError::NonFiniteCoordinate);
        }
        Ok(Self {
            category,
            name,
            address: address.into(),
            location,
            distance_m,
        })
    }
}

/// A competitor company location from the data-source collaborator.
///
/// Competitor sites carry no distance; the scorer derives it from the
/// candidate origin when building the "companies nearby" category.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorSite {
    /// Company name.
    pub name: String,
    /// Company position.
    pub location: Coord,
}

/// Errors returned by [`CompetitorSite::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompetitorSiteError {
    /// The company name was empty or whitespace.
    #[error("competitor site must have a name")]
    EmptyName,
    /// A coordinate component was NaN or infinite.
    #[error("competitor site coordinates must be finite")]
    NonFiniteCoordinate,
}

impl CompetitorSite {
    /// Validates and constructs a [`CompetitorSite`].
    pub fn new(name: impl Into<String>, location: Coord) -> Result<Self, CompetitorSiteError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CompetitorSiteError::EmptyName);
        }
        if !location.x.is_finite() || !location.y.is_finite() {
            return Err(CompetitorSiteError::NonFiniteCoordinate);
        }
        Ok(Self { name, location })
    }
}
