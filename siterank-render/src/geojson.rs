//! GeoJSON marker generation for map sinks.

use serde_json::{Value, json};
use siterank_core::{CityCandidate, PoiRecord};
use siterank_scorer::competitor_pois;

use crate::style::{ORIGIN_STYLE, style_for};

/// Build a GeoJSON `FeatureCollection` of markers for one candidate city.
///
/// The collection holds the origin marker (styled with
/// [`ORIGIN_STYLE`]), every POI record, and the synthetic
/// "companies nearby" records derived from the candidate's competitors, so
/// the map shows exactly what the scorer counts.
#[must_use]
pub fn city_markers(candidate: &CityCandidate) -> Value {
    let mut features = vec![json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [candidate.origin.x, candidate.origin.y],
        },
        "properties": {
            "name": candidate.name,
            "marker-color": ORIGIN_STYLE.colour,
            "icon": ORIGIN_STYLE.icon,
        },
    })];

    let nearby = competitor_pois(candidate.origin, &candidate.competitors);
    features.extend(candidate.pois.iter().chain(nearby.iter()).map(poi_feature));

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn poi_feature(record: &PoiRecord) -> Value {
    let style = style_for(&record.category);
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [record.location.x, record.location.y],
        },
        "properties": {
            "name": record.name,
            "category": record.category.as_str(),
            "address": record.address,
            "distance_m": record.distance_m,
            "marker-color": style.colour,
            "icon": style.icon,
        },
    })
}
