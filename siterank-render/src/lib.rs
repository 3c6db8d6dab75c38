//! Rendering collaborators for Siterank results.
//!
//! Map sinks consume the scored data purely as read-only input: this crate
//! turns a candidate's POIs into styled GeoJSON markers and the final
//! ranking into a plain-text table. Nothing in the scoring pipeline depends
//! on rendering succeeding.

#![forbid(unsafe_code)]

mod geojson;
mod style;
mod table;

pub use geojson::city_markers;
pub use style::{DEFAULT_STYLE, MarkerStyle, ORIGIN_STYLE, style_for};
pub use table::ranking_table;
