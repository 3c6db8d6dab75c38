//! Weighting engine: merge per-category tallies with configured weights.
#![forbid(unsafe_code)]

use log::debug;
use siterank_core::{Category, CategoryWeights, CityCandidate};

use crate::aggregate::{CategoryTally, aggregate_categories, competitor_pois};
use crate::error::ScoreError;

/// Derived distances for one category of one city.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Category the row covers.
    pub category: Category,
    /// Number of POIs found; zero when the default radius penalty applied.
    pub count: u64,
    /// Sum of POI distances from the origin, in metres.
    pub sum_distance_m: u64,
    /// Average distance in metres, rounded to one decimal; equals the
    /// configured default radius when `count` is zero.
    pub average_distance_m: f64,
    /// Average distance scaled by the category weight, one decimal.
    pub weighted_average_m: f64,
}

/// Weighting-engine output for one city: one row per configured category.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySummary {
    /// City the summary belongs to.
    pub city: String,
    /// Per-category rows, in category label order.
    pub categories: Vec<CategorySummary>,
    /// Sum of `weighted_average_m` across all categories, in metres.
    pub total_weighted_m: f64,
}

/// Summarise one candidate city against the weighting configuration.
///
/// Synthesises the "companies nearby" category from the candidate's
/// competitor sites, aggregates all records per category, then performs the
/// outer join against the configured categories.
///
/// # Errors
/// Returns [`ScoreError::UnconfiguredCategory`] when the candidate's records
/// contain a category the configuration does not cover.
pub fn summarise_city(
    candidate: &CityCandidate,
    weights: &CategoryWeights,
) -> Result<CitySummary, ScoreError> {
    let mut records = candidate.pois.clone();
    records.extend(competitor_pois(candidate.origin, &candidate.competitors));
    let tallies = aggregate_categories(&records);
    summarise_tallies(&candidate.name, &tallies, weights)
}

/// Outer join of configured categories against aggregated tallies.
///
/// Every configured category yields exactly one [`CategorySummary`]: where a
/// tally exists the average is `sum / count` rounded to one decimal, and
/// where none exists the configured default radius stands in as the penalty
/// average. The weighted average is `average x weight`, one decimal.
///
/// # Errors
/// Returns [`ScoreError::UnconfiguredCategory`] when a tally's category has
/// no weighting entry; scoring an unweighted category would silently skew
/// the total.
#[expect(
    clippy::float_arithmetic,
    reason = "weighting and totalling are defined over real-valued distances"
)]
pub fn summarise_tallies(
    city: &str,
    tallies: &[CategoryTally],
    weights: &CategoryWeights,
) -> Result<CitySummary, ScoreError> {
    if let Some(unmatched) = tallies.iter().find(|tally| !weights.contains(&tally.category)) {
        return Err(ScoreError::UnconfiguredCategory {
            category: unmatched.category.clone(),
        });
    }

    let mut categories = Vec::with_capacity(weights.len());
    let mut total_weighted_m = 0.0_f64;
    for (category, params) in weights.iter() {
        let tally = tallies.iter().find(|candidate| &candidate.category == category);
        let (count, sum_distance_m) =
            tally.map_or((0, 0), |found| (found.count, found.sum_distance_m));
        let average_distance_m = average_distance(count, sum_distance_m, params.default_radius_m);
        let weighted_average_m = round1(average_distance_m * params.weight);
        total_weighted_m += weighted_average_m;
        categories.push(CategorySummary {
            category: category.clone(),
            count,
            sum_distance_m,
            average_distance_m,
            weighted_average_m,
        });
    }

    debug!("{city}: total weighted distance {total_weighted_m} m");
    Ok(CitySummary {
        city: city.to_owned(),
        categories,
        total_weighted_m,
    })
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "counts and metre sums are far below 2^52, so the f64 division is exact enough"
)]
fn average_distance(count: u64, sum_distance_m: u64, default_radius_m: f64) -> f64 {
    if count == 0 {
        round1(default_radius_m)
    } else {
        round1(sum_distance_m as f64 / count as f64)
    }
}

/// Round to one decimal place, the precision of the summary table.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to one decimal scales by ten and back"
)]
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
