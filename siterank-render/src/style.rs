//! Marker styles keyed by category label.

use siterank_core::Category;

/// Visual descriptor for one map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Marker colour name understood by the rendering sink.
    pub colour: &'static str,
    /// Font Awesome icon identifier.
    pub icon: &'static str,
}

/// Style applied to categories without a dedicated table entry.
pub const DEFAULT_STYLE: MarkerStyle = MarkerStyle {
    colour: "cadetblue",
    icon: "map-marker",
};

/// Style for the candidate office origin marker.
pub const ORIGIN_STYLE: MarkerStyle = MarkerStyle {
    colour: "black",
    icon: "diamond",
};

const STYLES: &[(&str, MarkerStyle)] = &[
    ("school", MarkerStyle { colour: "blue", icon: "graduation-cap" }),
    ("club", MarkerStyle { colour: "red", icon: "glass" }),
    ("starbucks", MarkerStyle { colour: "gray", icon: "coffee" }),
    ("airport", MarkerStyle { colour: "purple", icon: "plane" }),
    ("vegan restaurant", MarkerStyle { colour: "green", icon: "cutlery" }),
    ("basketball", MarkerStyle { colour: "orange", icon: "futbol-o" }),
    ("dog hairdresser", MarkerStyle { colour: "lightgray", icon: "paw" }),
    (
        Category::COMPANIES_NEARBY_LABEL,
        MarkerStyle { colour: "lightred", icon: "building" },
    ),
];

/// Look up the marker style for a category.
///
/// Categories absent from the table get [`DEFAULT_STYLE`] rather than no
/// marker at all.
#[must_use]
pub fn style_for(category: &Category) -> MarkerStyle {
    STYLES
        .iter()
        .find(|(label, _)| *label == category.as_str())
        .map_or(DEFAULT_STYLE, |&(_, style)| style)
}
