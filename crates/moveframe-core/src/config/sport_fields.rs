// ABOUTME: Per-sport field configuration: distances, speed labels, pause and rest options
// ABOUTME: Provides the built-in sport catalog and loading of externally supplied catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

//! Sport field configuration
//!
//! The planner UI reads these lists to build its option pickers; the engine
//! reads the category to decide which normalizer rules apply.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{SportCategory, SportType};

/// Pause choices, either one list or one list per rest type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PauseOptions {
    /// Same choices whatever the rest type
    Flat(Vec<String>),
    /// Choices keyed by rest type
    ByRestType(BTreeMap<String, Vec<String>>),
}

impl Default for PauseOptions {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

/// Field configuration for one sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportFieldConfig {
    /// Sport this configuration describes
    pub sport: SportType,
    /// Planning category
    pub category: SportCategory,
    /// Legal distances in meters (empty for non-distance sports)
    #[serde(default)]
    pub distances: Vec<u32>,
    /// Speed labels offered in the speed picker
    #[serde(default)]
    pub speed_labels: Vec<String>,
    /// Pause choices
    #[serde(default)]
    pub pause_options: PauseOptions,
    /// Rest types
    #[serde(default)]
    pub rest_types: Vec<String>,
    /// Macro choices
    #[serde(default)]
    pub macro_options: Vec<String>,
    /// Alarm choices
    #[serde(default)]
    pub alarm_options: Vec<String>,
    /// Sound choices
    #[serde(default)]
    pub sound_options: Vec<String>,
}

impl SportFieldConfig {
    /// Pause choices for a rest type
    ///
    /// Keyed options fall back to the first rest type's list when `rest_type`
    /// is absent or unknown.
    #[must_use]
    pub fn pause_options_for(&self, rest_type: Option<&str>) -> &[String] {
        match &self.pause_options {
            PauseOptions::Flat(options) => options.as_slice(),
            PauseOptions::ByRestType(by_type) => rest_type
                .and_then(|key| by_type.get(key))
                .or_else(|| {
                    self.rest_types
                        .first()
                        .and_then(|first| by_type.get(first))
                })
                .or_else(|| by_type.values().next())
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// Whether the sport has a canonical race distance
    #[must_use]
    pub const fn is_distance_based(&self) -> bool {
        matches!(self.category, SportCategory::Distance)
    }

    /// Built-in configuration for a sport
    #[must_use]
    pub fn builtin(sport: SportType) -> Self {
        let category = sport.category();
        let distances = match sport {
            SportType::Swim => vec![25, 50, 100, 200, 400, 800, 1500],
            SportType::Run | SportType::Walking | SportType::Hiking => {
                vec![100, 200, 400, 800, 1000, 2000, 5000, 10000]
            }
            SportType::Bike => vec![200, 500, 1000, 5000, 10000, 20000, 40000],
            SportType::Rowing | SportType::Canoeing | SportType::Kayaking => {
                vec![250, 500, 1000, 2000, 5000]
            }
            SportType::Ski | SportType::Skate => vec![500, 1000, 5000, 10000],
            _ => Vec::new(),
        };

        let speed_labels = match category {
            SportCategory::Distance => labels(&["A1", "A2", "B1", "B2", "C1", "C2", "D1", "D2"]),
            SportCategory::Strength => labels(&["slow", "medium", "fast", "explosive"]),
            SportCategory::Tool => labels(&["slow", "medium", "fast"]),
        };

        let rest_types = match category {
            SportCategory::Distance => labels(&["passive", "active", "in_place"]),
            SportCategory::Strength | SportCategory::Tool => labels(&["passive", "active"]),
        };

        let pause_options = match category {
            SportCategory::Distance => PauseOptions::ByRestType(BTreeMap::from([
                (
                    "passive".to_owned(),
                    labels(&["0'10\"", "0'20\"", "0'30\"", "1'00\"", "2'00\"", "3'00\""]),
                ),
                (
                    "active".to_owned(),
                    labels(&["0'30\"", "1'00\"", "2'00\"", "5'00\""]),
                ),
                ("in_place".to_owned(), labels(&["0'05\"", "0'10\"", "0'15\""])),
            ])),
            SportCategory::Strength | SportCategory::Tool => PauseOptions::Flat(labels(&[
                "0'15\"", "0'30\"", "0'45\"", "1'00\"", "1'30\"", "2'00\"",
            ])),
        };

        Self {
            sport,
            category,
            distances,
            speed_labels,
            pause_options,
            rest_types,
            macro_options: labels(&["none", "warm_up", "main_set", "cool_down"]),
            alarm_options: labels(&["none", "start", "end", "every_rep"]),
            sound_options: labels(&["none", "beep", "bell", "whistle"]),
        }
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Field configurations for every plannable sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportFieldCatalog {
    sports: BTreeMap<SportType, SportFieldConfig>,
}

impl SportFieldCatalog {
    /// Catalog covering every [`SportType`] with built-in options
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            sports: SportType::ALL
                .into_iter()
                .map(|sport| (sport, SportFieldConfig::builtin(sport)))
                .collect(),
        }
    }

    /// Build a catalog from a list of sport configurations
    ///
    /// # Errors
    ///
    /// Returns an error if a sport appears twice or a sport is declared under
    /// a category other than its own
    pub fn from_configs(configs: Vec<SportFieldConfig>) -> AppResult<Self> {
        let mut sports = BTreeMap::new();
        for config in configs {
            if config.category != config.sport.category() {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!(
                        "{} is a {} sport, not {}",
                        config.sport,
                        config.sport.category(),
                        config.category
                    ),
                ));
            }
            let sport = config.sport;
            if sports.insert(sport, config).is_some() {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("{sport} is configured more than once"),
                ));
            }
        }
        Ok(Self { sports })
    }

    /// Parse a catalog from a JSON array of sport configurations
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails catalog validation
    pub fn from_json(json: &str) -> AppResult<Self> {
        let configs: Vec<SportFieldConfig> = serde_json::from_str(json)?;
        Self::from_configs(configs)
    }

    /// Configuration for a sport
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the catalog does not cover `sport`
    pub fn get(&self, sport: SportType) -> AppResult<&SportFieldConfig> {
        self.sports
            .get(&sport)
            .ok_or_else(|| AppError::not_found(format!("Field configuration for {sport}")))
    }

    /// Iterate configurations in sport order
    pub fn iter(&self) -> impl Iterator<Item = &SportFieldConfig> {
        self.sports.values()
    }

    /// Number of configured sports
    #[must_use]
    pub fn len(&self) -> usize {
        self.sports.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }
}

impl Default for SportFieldCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
