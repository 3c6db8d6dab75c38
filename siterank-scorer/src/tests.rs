//! Unit coverage for the scoring pipeline.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use geo::Coord;
use rstest::{fixture, rstest};
use siterank_core::{
    Category, CategoryParams, CategoryWeights, CityCandidate, CompetitorSite, PoiRecord,
};

use crate::{
    CategoryTally, CitySummary, ScoreError, aggregate_categories, competitor_pois,
    rank_candidates, rank_cities, summarise_city, summarise_tallies,
};

// Longitudes on the equator chosen so the haversine distance from (0, 0)
// rounds to exactly the named number of metres.
const LON_100_M: f64 = 0.000_899_322;
const LON_4999_M: f64 = 0.044_957_087;
const LON_6000_M: f64 = 0.053_959_296;

fn category(label: &str) -> Category {
    Category::new(label).expect("valid category label")
}

fn poi(label: &str, distance_m: u32) -> PoiRecord {
    PoiRecord::new(
        category(label),
        format!("{label} at {distance_m} m"),
        "",
        Coord { x: 0.0, y: 0.0 },
        distance_m,
    )
    .expect("valid POI record")
}

fn weights(entries: &[(&str, f64, f64)]) -> CategoryWeights {
    let mut params = BTreeMap::new();
    for &(label, weight, radius) in entries {
        params.insert(
            category(label),
            CategoryParams::new(weight, radius).expect("valid params"),
        );
    }
    CategoryWeights::new(params).expect("non-empty weighting config")
}

fn summary(city: &str, total_weighted_m: f64) -> CitySummary {
    CitySummary {
        city: city.to_owned(),
        categories: Vec::new(),
        total_weighted_m,
    }
}

#[fixture]
fn origin() -> Coord {
    Coord { x: 0.0, y: 0.0 }
}

#[rstest]
fn aggregates_counts_and_summed_distances() {
    let records = vec![poi("school", 100), poi("school", 200), poi("school", 300)];

    let tallies = aggregate_categories(&records);

    assert_eq!(
        tallies,
        vec![CategoryTally {
            category: category("school"),
            count: 3,
            sum_distance_m: 600,
        }]
    );
}

#[rstest]
fn aggregates_each_category_separately_in_label_order() {
    let records = vec![poi("school", 100), poi("club", 50), poi("school", 200)];

    let tallies = aggregate_categories(&records);

    let labels: Vec<&str> = tallies.iter().map(|tally| tally.category.as_str()).collect();
    assert_eq!(labels, ["club", "school"]);
    assert_eq!(tallies.first().map(|tally| tally.count), Some(1));
}

#[rstest]
fn absent_categories_produce_no_tally() {
    assert!(aggregate_categories(&[]).is_empty());
}

#[rstest]
fn competitor_filter_keeps_only_nearby_sites(origin: Coord) {
    let competitors = vec![
        CompetitorSite::new("HQ itself", origin).expect("valid site"),
        CompetitorSite::new("edge of range", Coord { x: LON_4999_M, y: 0.0 })
            .expect("valid site"),
        CompetitorSite::new("out of range", Coord { x: LON_6000_M, y: 0.0 })
            .expect("valid site"),
        CompetitorSite::new("close rival", Coord { x: LON_100_M, y: 0.0 }).expect("valid site"),
    ];

    let nearby = competitor_pois(origin, &competitors);

    let names: Vec<&str> = nearby.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, ["close rival", "edge of range"]);
    assert_eq!(nearby.first().map(|record| record.distance_m), Some(100));
    assert_eq!(nearby.last().map(|record| record.distance_m), Some(4999));
    assert!(
        nearby
            .iter()
            .all(|record| record.category == Category::companies_nearby())
    );
}

#[rstest]
fn missing_category_falls_back_to_the_default_radius() {
    let config = weights(&[("club", 0.5, 2000.0)]);

    let result = summarise_tallies("Barcelona", &[], &config).expect("summary");

    let row = result.categories.first().expect("one row per configured category");
    assert_eq!(row.count, 0);
    assert_eq!(row.average_distance_m, 2000.0);
    assert_eq!(row.weighted_average_m, 1000.0);
}

#[rstest]
fn weighted_average_scales_the_average_distance() {
    let config = weights(&[("school", 2.0, 2000.0)]);
    let tallies = vec![CategoryTally {
        category: category("school"),
        count: 2,
        sum_distance_m: 500,
    }];

    let result = summarise_tallies("Barcelona", &tallies, &config).expect("summary");

    let row = result.categories.first().expect("school row");
    assert_eq!(row.average_distance_m, 250.0);
    assert_eq!(row.weighted_average_m, 500.0);
}

#[rstest]
fn averages_round_to_one_decimal() {
    let config = weights(&[("school", 1.0, 2000.0)]);
    let tallies = vec![CategoryTally {
        category: category("school"),
        count: 3,
        sum_distance_m: 1000,
    }];

    let result = summarise_tallies("Barcelona", &tallies, &config).expect("summary");

    let row = result.categories.first().expect("school row");
    assert_eq!(row.average_distance_m, 333.3);
    assert_eq!(row.weighted_average_m, 333.3);
}

#[rstest]
fn every_configured_category_appears_exactly_once() {
    let config = weights(&[("airport", 0.3, 50_000.0), ("school", 1.0, 2000.0)]);
    let tallies = vec![CategoryTally {
        category: category("school"),
        count: 1,
        sum_distance_m: 400,
    }];

    let result = summarise_tallies("Barcelona", &tallies, &config).expect("summary");

    let labels: Vec<&str> = result
        .categories
        .iter()
        .map(|row| row.category.as_str())
        .collect();
    assert_eq!(labels, ["airport", "school"]);
}

#[rstest]
fn unconfigured_categories_are_rejected() {
    let config = weights(&[("school", 1.0, 2000.0)]);
    let tallies = vec![CategoryTally {
        category: category("heliport"),
        count: 1,
        sum_distance_m: 900,
    }];

    let err = summarise_tallies("Barcelona", &tallies, &config)
        .expect_err("unweighted category must fail");
    assert_eq!(
        err,
        ScoreError::UnconfiguredCategory {
            category: category("heliport"),
        }
    );
}

#[rstest]
fn ranking_normalises_against_the_minimum_total() {
    let summaries = vec![summary("Madrid", 2000.0), summary("Barcelona", 1000.0)];

    let ranking = rank_cities(&summaries).expect("ranking");

    let rows: Vec<(&str, u32)> = ranking
        .entries()
        .iter()
        .map(|entry| (entry.city.as_str(), entry.score))
        .collect();
    assert_eq!(rows, [("Barcelona", 100), ("Madrid", 200)]);
    assert_eq!(ranking.best().map(|entry| entry.city.as_str()), Some("Barcelona"));
}

#[rstest]
fn a_single_city_always_scores_one_hundred() {
    let ranking = rank_cities(&[summary("Barcelona", 1234.5)]).expect("ranking");

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking.best().map(|entry| entry.score), Some(100));
}

#[rstest]
fn tied_scores_order_by_city_name() {
    let summaries = vec![summary("Madrid", 1000.0), summary("Barcelona", 1000.0)];

    let ranking = rank_cities(&summaries).expect("ranking");

    let cities: Vec<&str> = ranking.entries().iter().map(|entry| entry.city.as_str()).collect();
    assert_eq!(cities, ["Barcelona", "Madrid"]);
}

#[rstest]
fn an_empty_comparison_is_rejected() {
    assert_eq!(rank_cities(&[]), Err(ScoreError::NoCities));
}

#[rstest]
fn a_zero_minimum_total_is_rejected() {
    let summaries = vec![summary("Ghost Town", 0.0), summary("Barcelona", 1000.0)];

    let err = rank_cities(&summaries).expect_err("zero minimum must fail");
    assert_eq!(
        err,
        ScoreError::ZeroMinimumTotal {
            city: "Ghost Town".to_owned(),
        }
    );
}

#[rstest]
fn pipeline_is_deterministic(origin: Coord) {
    let config = weights(&[
        ("club", 0.5, 2000.0),
        ("school", 1.0, 2000.0),
        (Category::COMPANIES_NEARBY_LABEL, 0.8, 5000.0),
    ]);
    let competitors = vec![
        CompetitorSite::new("rival", Coord { x: LON_100_M, y: 0.0 }).expect("valid site"),
    ];
    let barcelona = CityCandidate::new(
        "Barcelona",
        origin,
        vec![poi("school", 100), poi("school", 300), poi("club", 250)],
        competitors,
    )
    .expect("valid candidate");
    let madrid = CityCandidate::new(
        "Madrid",
        Coord { x: -3.70, y: 40.42 },
        vec![poi("school", 900)],
        Vec::new(),
    )
    .expect("valid candidate");
    let candidates = vec![barcelona, madrid];

    let first = rank_candidates(&candidates, &config).expect("first run");
    let second = rank_candidates(&candidates, &config).expect("second run");

    assert_eq!(first, second);
    assert_eq!(first.best().map(|entry| entry.city.as_str()), Some("Barcelona"));
}

#[rstest]
fn end_to_end_totals_include_the_competitor_category(origin: Coord) {
    let config = weights(&[
        ("school", 1.0, 2000.0),
        (Category::COMPANIES_NEARBY_LABEL, 2.0, 5000.0),
    ]);
    let competitors = vec![
        CompetitorSite::new("rival", Coord { x: LON_100_M, y: 0.0 }).expect("valid site"),
        CompetitorSite::new("too far", Coord { x: LON_6000_M, y: 0.0 }).expect("valid site"),
    ];
    let candidate = CityCandidate::new("Barcelona", origin, vec![poi("school", 400)], competitors)
        .expect("valid candidate");

    let result = summarise_city(&candidate, &config).expect("summary");

    // school: avg 400 x 1.0 = 400; companies nearby: avg 100 x 2.0 = 200.
    assert_eq!(result.total_weighted_m, 600.0);
}
