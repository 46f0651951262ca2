// ABOUTME: Integration tests for environment-driven planner configuration
// ABOUTME: Verifies MOVEFRAME_* parsing, fallbacks and sport catalog loading from disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::fs;

use moveframe_planner::config::{load_catalog, IconStyle, PlannerConfig};
use moveframe_planner::engine::RegenerationPolicy;
use moveframe_planner::errors::ErrorCode;
use moveframe_planner::models::SportType;
use serial_test::serial;
use tempfile::TempDir;

const VARS: [&str; 5] = [
    "MOVEFRAME_DEFAULT_SPORT",
    "MOVEFRAME_PAUSE_STATIONS",
    "MOVEFRAME_REGENERATION_POLICY",
    "MOVEFRAME_ICON_STYLE",
    "MOVEFRAME_SPORT_CATALOG",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

const ROWING_ONLY: &str = r#"[
    {
        "sport": "rowing",
        "category": "distance",
        "distances": [500, 2000],
        "pauseOptions": ["1'00\"", "2'00\""]
    }
]"#;

#[test]
#[serial]
fn test_defaults_without_environment() {
    common::init_test_logging();
    clear_env();

    let config = PlannerConfig::from_env().unwrap();

    assert_eq!(config.default_sport, SportType::Run);
    assert_eq!(config.pause_stations, "0'30\"");
    assert_eq!(config.regeneration_policy, RegenerationPolicy::PreserveEdits);
    assert_eq!(config.icon_style, IconStyle::Emoji);
    assert!(config.catalog_path.is_none());
    assert_eq!(config.catalog.len(), SportType::ALL.len());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("MOVEFRAME_DEFAULT_SPORT", "BODY_BUILDING");
    env::set_var("MOVEFRAME_PAUSE_STATIONS", "145");
    env::set_var("MOVEFRAME_REGENERATION_POLICY", "discard");
    env::set_var("MOVEFRAME_ICON_STYLE", "image");

    let config = PlannerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.default_sport, SportType::BodyBuilding);
    assert_eq!(config.pause_stations, "1'45\"");
    assert_eq!(config.regeneration_policy, RegenerationPolicy::Discard);
    assert_eq!(config.icon_style, IconStyle::Image);

    let generator = config.circuit_generator();
    assert_eq!(generator.pause_stations(), "1'45\"");
    assert_eq!(generator.policy(), RegenerationPolicy::Discard);
}

#[test]
#[serial]
fn test_invalid_values_fall_back() {
    clear_env();
    env::set_var("MOVEFRAME_DEFAULT_SPORT", "curling");
    env::set_var("MOVEFRAME_PAUSE_STATIONS", "later");
    env::set_var("MOVEFRAME_REGENERATION_POLICY", "sometimes");

    let config = PlannerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.default_sport, SportType::Run);
    assert_eq!(config.pause_stations, "0'30\"");
    assert_eq!(config.regeneration_policy, RegenerationPolicy::PreserveEdits);
}

#[test]
#[serial]
fn test_catalog_loaded_from_environment() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sports.json");
    fs::write(&path, ROWING_ONLY).unwrap();
    env::set_var("MOVEFRAME_SPORT_CATALOG", &path);

    let config = PlannerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.catalog_path.as_deref(), Some(path.as_path()));
    assert_eq!(config.catalog.len(), 1);
    let rowing = config.sport_config(SportType::Rowing).unwrap();
    assert_eq!(rowing.distances, vec![500, 2000]);
    assert_eq!(rowing.pause_options_for(None), ["1'00\"", "2'00\""]);

    let err = config.sport_config(SportType::Swim).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(config.summary().contains("1 sports"));
}

#[test]
#[serial]
fn test_missing_catalog_is_config_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    env::set_var("MOVEFRAME_SPORT_CATALOG", dir.path().join("absent.json"));

    let err = PlannerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
}

#[test]
fn test_malformed_catalog_is_config_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("broken.json"));
}

#[test]
fn test_catalog_with_wrong_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mismatch.json");
    fs::write(&path, r#"[{"sport": "yoga", "category": "distance"}]"#).unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_default_config_matches_builtin() {
    let config = PlannerConfig::default();
    assert_eq!(config.default_sport, SportType::Run);
    assert!(config.summary().contains("built-in"));
    assert_eq!(config.circuit_generator().pause_stations(), "0'30\"");
}
