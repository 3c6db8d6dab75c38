//! Grouping of POI records into per-category tallies.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use geo::Coord;
use siterank_core::{Category, CompetitorSite, PoiRecord, haversine_distance_m};

/// Maximum distance in metres at which a competitor counts as "nearby".
pub const NEARBY_COMPETITOR_RANGE_M: u32 = 5_000;

/// Record count and summed distance for one category within one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTally {
    /// Category the tally covers.
    pub category: Category,
    /// Number of POIs found for the category.
    pub count: u64,
    /// Sum of the POI distances from the origin, in metres.
    pub sum_distance_m: u64,
}

/// Group records by category label and tally count and summed distance.
///
/// Categories with no matching records are absent from the output rather
/// than present as zero rows; the weighting engine reconciles them against
/// the configured category set. Output is sorted by category label.
#[must_use]
pub fn aggregate_categories(records: &[PoiRecord]) -> Vec<CategoryTally> {
    let mut groups: BTreeMap<&Category, (u64, u64)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(&record.category).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(record.distance_m);
    }
    groups
        .into_iter()
        .map(|(category, (count, sum_distance_m))| CategoryTally {
            category: category.clone(),
            count,
            sum_distance_m,
        })
        .collect()
}

/// Turn competitor sites into synthetic "companies nearby" POI records.
///
/// The distance from the candidate origin is derived with the haversine
/// formula. Sites at distance `0` (the origin company itself) and sites
/// beyond [`NEARBY_COMPETITOR_RANGE_M`] are excluded; survivors are sorted
/// by distance ascending.
#[must_use]
pub fn competitor_pois(origin: Coord, competitors: &[CompetitorSite]) -> Vec<PoiRecord> {
    let mut nearby: Vec<PoiRecord> = competitors
        .iter()
        .filter_map(|site| {
            let distance_m = haversine_distance_m(origin, site.location);
            if distance_m == 0 || distance_m > NEARBY_COMPETITOR_RANGE_M {
                return None;
            }
            // CompetitorSite validation guarantees construction succeeds.
            PoiRecord::new(
                Category::companies_nearby(),
                site.name.clone(),
                String::new(),
                site.location,
                distance_m,
            )
            .ok()
        })
        .collect();
    nearby.sort_by_key(|record| record.distance_m);
    nearby
}
