//! Unit coverage for the rank command.
#![forbid(unsafe_code)]

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::rank::{RankArgs, RankConfig, rank_to_table};
use crate::CliError;

const WEIGHTS_JSON: &str = r#"{
    "school": {"weight": 1.0, "default_radius_m": 2000.0},
    "club": {"weight": 0.5, "default_radius_m": 2000.0},
    "companies nearby": {"weight": 0.8, "default_radius_m": 5000.0}
}"#;

fn manifest_json(name: &str, school_distance: u32) -> String {
    format!(
        r#"{{
            "name": "{name}",
            "origin": {{"latitude": 41.3851, "longitude": 2.1734}},
            "places": {{
                "school": {{"results": [{{
                    "name": "Some School",
                    "distance": {school_distance},
                    "geocodes": {{"main": {{"latitude": 41.3919, "longitude": 2.1686}}}}
                }}]}}
            }},
            "competitors": []
        }}"#
    )
}

fn write_file(dir: &Utf8Path, file_name: &str, contents: &str) -> Utf8PathBuf {
    let path = dir.join(file_name);
    fs::write(path.as_std_path(), contents).expect("write fixture file");
    path
}

#[fixture]
fn workspace() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let utf8 = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir");
    (dir, utf8)
}

fn base_args(weights: Utf8PathBuf, manifests: Vec<Utf8PathBuf>) -> RankArgs {
    RankArgs {
        manifests,
        weights: Some(weights),
        geojson_dir: None,
    }
}

#[rstest]
fn config_requires_at_least_one_manifest() {
    let args = base_args(Utf8PathBuf::from("weights.json"), Vec::new());
    let err = RankConfig::try_from(args).expect_err("no manifests must fail");
    assert!(matches!(err, CliError::NoManifests));
}

#[rstest]
fn config_requires_the_weights_path() {
    let args = RankArgs {
        manifests: vec![Utf8PathBuf::from("barcelona.json")],
        weights: None,
        geojson_dir: None,
    };
    let err = RankConfig::try_from(args).expect_err("missing weights must fail");
    assert!(matches!(err, CliError::MissingArgument { field: "weights", .. }));
}

#[rstest]
fn config_resolves_from_complete_args() {
    let args = base_args(
        Utf8PathBuf::from("weights.json"),
        vec![Utf8PathBuf::from("barcelona.json")],
    );
    let config = RankConfig::try_from(args).expect("complete args resolve");
    assert_eq!(config.weights, Utf8PathBuf::from("weights.json"));
    assert_eq!(config.manifests.len(), 1);
    assert_eq!(config.geojson_dir, None);
}

#[rstest]
fn validation_rejects_missing_source_files(workspace: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = workspace;
    let weights = write_file(&dir, "weights.json", WEIGHTS_JSON);
    let config = RankConfig {
        manifests: vec![dir.join("missing.json")],
        weights,
        geojson_dir: None,
    };

    let err = config.validate_sources().expect_err("missing manifest must fail");
    assert!(matches!(err, CliError::MissingSourceFile { field: "manifest", .. }));
}

#[rstest]
fn ranks_cities_from_manifest_files(workspace: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = workspace;
    let weights = write_file(&dir, "weights.json", WEIGHTS_JSON);
    let barcelona = write_file(&dir, "barcelona.json", &manifest_json("Barcelona", 400));
    let madrid = write_file(&dir, "madrid.json", &manifest_json("Madrid", 900));
    let config = RankConfig {
        manifests: vec![madrid, barcelona],
        weights,
        geojson_dir: None,
    };
    config.validate_sources().expect("fixture files exist");

    let table = rank_to_table(&config).expect("ranking succeeds");

    let lines: Vec<&str> = table.lines().collect();
    assert!(lines.first().is_some_and(|line| line.starts_with("City")));
    assert!(lines.get(1).is_some_and(|line| line.starts_with("Barcelona")));
    assert!(lines.get(1).is_some_and(|line| line.ends_with("100")));
    assert!(lines.get(2).is_some_and(|line| line.starts_with("Madrid")));
}

#[rstest]
fn writes_one_geojson_file_per_city(workspace: (TempDir, Utf8PathBuf)) {
    let (_guard, dir) = workspace;
    let weights = write_file(&dir, "weights.json", WEIGHTS_JSON);
    let barcelona = write_file(&dir, "barcelona.json", &manifest_json("Barcelona", 400));
    let out_dir = dir.join("maps");
    let config = RankConfig {
        manifests: vec![barcelona],
        weights,
        geojson_dir: Some(out_dir.clone()),
    };

    rank_to_table(&config).expect("ranking succeeds");

    let body = fs::read_to_string(out_dir.join("Barcelona.geojson").as_std_path())
        .expect("GeoJSON file written");
    let parsed: serde_json::Value = serde_json::from_str(&body).expect("valid GeoJSON");
    assert_eq!(parsed["type"], "FeatureCollection");
    let features = parsed["features"].as_array().expect("features array");
    // Origin marker plus the single school POI.
    assert_eq!(features.len(), 2);
}
