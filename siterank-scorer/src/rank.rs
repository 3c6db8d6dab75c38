//! Cross-city normalisation and ranking.
#![forbid(unsafe_code)]

use crate::error::ScoreError;
use crate::summary::CitySummary;

/// Normalised desirability score for one candidate city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityScore {
    /// City name.
    pub city: String,
    /// Total weighted distance as a percentage of the best city's total;
    /// 100 means best, larger means further from the desired amenities.
    pub score: u32,
    /// Total weighted distance backing the score, in metres.
    pub total_weighted_m: f64,
}

/// Ranked table of city scores, best candidate first.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    entries: Vec<CityScore>,
}

impl Ranking {
    /// Return the ranked entries, ascending by score.
    #[must_use]
    pub fn entries(&self) -> &[CityScore] {
        &self.entries
    }

    /// Return the best candidate (score 100).
    #[must_use]
    pub fn best(&self) -> Option<&CityScore> {
        self.entries.first()
    }

    /// Return the number of ranked cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the ranking is empty (never true post-construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the ranking and return the underlying entries.
    #[must_use]
    pub fn into_inner(self) -> Vec<CityScore> {
        self.entries
    }
}

/// Normalise city totals against the minimum and produce the ranked table.
///
/// The best (minimum-total) city scores exactly 100; every other city's
/// score is its total expressed as a percentage of that minimum, rounded to
/// the nearest whole number. Entries are sorted ascending by score, with
/// ties broken by city name so repeated runs are deterministic. A
/// single-city input always yields 100, which makes the comparison vacuous
/// but is not an error.
///
/// # Errors
/// Returns [`ScoreError::NoCities`] for an empty input and
/// [`ScoreError::ZeroMinimumTotal`] when the minimum total is zero or not a
/// positive finite number, since normalising against it would divide by
/// zero.
pub fn rank_cities(summaries: &[CitySummary]) -> Result<Ranking, ScoreError> {
    let Some(minimum) = summaries
        .iter()
        .min_by(|a, b| a.total_weighted_m.total_cmp(&b.total_weighted_m))
    else {
        return Err(ScoreError::NoCities);
    };
    if !(minimum.total_weighted_m > 0.0 && minimum.total_weighted_m.is_finite()) {
        return Err(ScoreError::ZeroMinimumTotal {
            city: minimum.city.clone(),
        });
    }

    let mut entries: Vec<CityScore> = summaries
        .iter()
        .map(|summary| CityScore {
            city: summary.city.clone(),
            score: normalised_score(summary.total_weighted_m, minimum.total_weighted_m),
            total_weighted_m: summary.total_weighted_m,
        })
        .collect();
    entries.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.city.cmp(&b.city)));
    Ok(Ranking { entries })
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the minimum is checked positive and finite, so the rounded \
              percentage is a small non-negative integer"
)]
fn normalised_score(total_weighted_m: f64, minimum: f64) -> u32 {
    (total_weighted_m * 100.0 / minimum).round() as u32
}
