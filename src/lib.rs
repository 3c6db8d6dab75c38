//! Facade crate for the Siterank office-location scoring engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline so
//! callers can depend on a single crate. Input parsing lives in
//! `siterank-data` and map-marker rendering in `siterank-render`; both are
//! optional collaborators rather than part of the scoring core.

#![forbid(unsafe_code)]

pub use siterank_core::{
    Category, CategoryError, CategoryParams, CategoryParamsError, CategoryWeights,
    CategoryWeightsError, CityCandidate, CityCandidateError, CompetitorSite, CompetitorSiteError,
    EARTH_RADIUS_M, PoiRecord, PoiRecordError, haversine_distance_m,
};

pub use siterank_scorer::{
    CategorySummary, CategoryTally, CityScore, CitySummary, NEARBY_COMPETITOR_RANGE_M, Ranking,
    ScoreError, aggregate_categories, competitor_pois, rank_candidates, rank_cities,
    summarise_city, summarise_tallies,
};
