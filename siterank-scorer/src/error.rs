//! Error types raised by the scoring pipeline.
#![forbid(unsafe_code)]

use siterank_core::Category;
use thiserror::Error;

/// Errors raised while summarising or ranking candidate cities.
///
/// The pipeline fails loudly rather than producing a silently wrong score:
/// every condition that would corrupt the ranking surfaces here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// An aggregated category has no entry in the weighting configuration.
    #[error("category '{category}' has no weighting entry")]
    UnconfiguredCategory {
        /// Label found in the aggregated data.
        category: Category,
    },
    /// The ranking step received no city summaries.
    #[error("ranking requires at least one city summary")]
    NoCities,
    /// The best city's total weighted distance is zero, so scores cannot be
    /// normalised against it.
    #[error("city '{city}' has a zero total weighted distance; normalisation would divide by zero")]
    ZeroMinimumTotal {
        /// Name of the city holding the zero minimum.
        city: String,
    },
}
