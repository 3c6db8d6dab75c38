//! Scoring pipeline for Siterank city candidates.
//!
//! The pipeline is a single-pass batch computation with three stages:
//! - **aggregation** groups POI records into per-category tallies and
//!   synthesises the "companies nearby" category from competitor sites;
//! - **weighting** outer-joins the tallies against the configured category
//!   weights, filling absent categories with the default radius penalty;
//! - **ranking** normalises each city's total weighted distance against the
//!   best city, which scores exactly 100.
//!
//! Every stage is a pure function of its inputs: no I/O, no shared state,
//! and identical inputs always produce identical output.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use geo::Coord;
//! use siterank_core::{Category, CategoryParams, CategoryWeights, CityCandidate, PoiRecord};
//! use siterank_scorer::rank_candidates;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let school = Category::new("school")?;
//! let mut params = BTreeMap::new();
//! params.insert(school.clone(), CategoryParams::new(1.0, 2000.0)?);
//! let weights = CategoryWeights::new(params)?;
//!
//! let origin = Coord { x: 2.17, y: 41.38 };
//! let poi = PoiRecord::new(school, "Escola Sant Marc", "", origin, 400)?;
//! let near = CityCandidate::new("Barcelona", origin, vec![poi], Vec::new())?;
//! let far = CityCandidate::new("Madrid", Coord { x: -3.70, y: 40.42 }, Vec::new(), Vec::new())?;
//!
//! let ranking = rank_candidates(&[near, far], &weights)?;
//! let best = ranking.best().ok_or("empty ranking")?;
//! assert_eq!(best.city, "Barcelona");
//! assert_eq!(best.score, 100);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod aggregate;
mod error;
mod rank;
mod summary;

pub use aggregate::{
    CategoryTally, NEARBY_COMPETITOR_RANGE_M, aggregate_categories, competitor_pois,
};
pub use error::ScoreError;
pub use rank::{CityScore, Ranking, rank_cities};
pub use summary::{CategorySummary, CitySummary, summarise_city, summarise_tallies};

use siterank_core::{CategoryWeights, CityCandidate};

/// Score and rank candidate cities end to end.
///
/// Summarises each candidate against the weighting configuration, then
/// normalises the totals into the ranked table.
///
/// # Errors
/// Propagates [`ScoreError`] from either stage: an unconfigured category in
/// any candidate's records, an empty candidate list, or a zero minimum
/// total.
pub fn rank_candidates(
    candidates: &[CityCandidate],
    weights: &CategoryWeights,
) -> Result<Ranking, ScoreError> {
    let summaries = candidates
        .iter()
        .map(|candidate| summarise_city(candidate, weights))
        .collect::<Result<Vec<_>, _>>()?;
    rank_cities(&summaries)
}

#[cfg(test)]
mod tests;
