//! Category labels and the weighting configuration.
//!
//! Categories are open-ended string labels ("school", "club", "companies
//! nearby") rather than a closed enum: each deployment configures its own
//! set of amenity queries and weights.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Label identifying one amenity category, e.g. `"school"`.
///
/// # Examples
/// ```
/// use siterank_core::Category;
///
/// # fn main() -> Result<(), siterank_core::CategoryError> {
/// let category = Category::new("vegan restaurant")?;
/// assert_eq!(category.as_str(), "vegan restaurant");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

/// Errors returned by [`Category::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    /// The label was empty or whitespace.
    #[error("category label must not be empty")]
    Empty,
}

impl Category {
    /// Label of the synthetic category built from competitor sites.
    pub const COMPANIES_NEARBY_LABEL: &'static str = "companies nearby";

    /// Validates and constructs a [`Category`].
    pub fn new(label: impl Into<String>) -> Result<Self, CategoryError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(CategoryError::Empty);
        }
        Ok(Self(label))
    }

    /// The synthetic category applied to competitor sites within range.
    #[must_use]
    pub fn companies_nearby() -> Self {
        Self(Self::COMPANIES_NEARBY_LABEL.to_owned())
    }

    /// Return the label as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Importance weight and fallback radius for one category.
///
/// `default_radius_m` stands in for the average distance when a city has no
/// POIs in the category: "nothing found within the typical search radius".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryParams {
    /// Multiplier applied to the category's average distance.
    pub weight: f64,
    /// Penalty distance in metres used when no POIs were found.
    pub default_radius_m: f64,
}

/// Errors returned by [`CategoryParams::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryParamsError {
    /// The weight was zero, negative, or not finite.
    #[error("category weight must be a positive finite number")]
    InvalidWeight,
    /// The default radius was zero, negative, or not finite.
    #[error("category default radius must be a positive finite number")]
    InvalidRadius,
}

impl CategoryParams {
    /// Validates and constructs [`CategoryParams`].
    pub fn new(weight: f64, default_radius_m: f64) -> Result<Self, CategoryParamsError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CategoryParamsError::InvalidWeight);
        }
        if !default_radius_m.is_finite() || default_radius_m <= 0.0 {
            return Err(CategoryParamsError::InvalidRadius);
        }
        Ok(Self {
            weight,
            default_radius_m,
        })
    }
}

/// Weighting configuration mapping each configured category to its params.
///
/// Iteration order is deterministic (sorted by label) so repeated scoring
/// runs over identical inputs produce identical output.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use siterank_core::{Category, CategoryParams, CategoryWeights};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut params = BTreeMap::new();
/// params.insert(Category::new("school")?, CategoryParams::new(1.0, 2000.0)?);
/// let weights = CategoryWeights::new(params)?;
/// assert_eq!(weights.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeights {
    params: BTreeMap<Category, CategoryParams>,
}

/// Errors returned by [`CategoryWeights::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryWeightsError {
    /// No categories were configured.
    #[error("weighting configuration must contain at least one category")]
    Empty,
}

impl CategoryWeights {
    /// Validates and constructs [`CategoryWeights`].
    pub fn new(params: BTreeMap<Category, CategoryParams>) -> Result<Self, CategoryWeightsError> {
        if params.is_empty() {
            return Err(CategoryWeightsError::Empty);
        }
        Ok(Self { params })
    }

    /// Return the params for a category, if configured.
    #[must_use]
    pub fn get(&self, category: &Category) -> Option<CategoryParams> {
        self.params.get(category).copied()
    }

    /// Report whether a category has a configured entry.
    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        self.params.contains_key(category)
    }

    /// Iterate over configured categories in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, CategoryParams)> {
        self.params.iter().map(|(category, params)| (category, *params))
    }

    /// Return the number of configured categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Report whether the configuration is empty (never true post-construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
