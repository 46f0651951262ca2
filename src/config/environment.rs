// ABOUTME: Environment configuration for the planner: default sport, circuit pause, policies
// ABOUTME: Parses MOVEFRAME_* variables with logged fallbacks and loads optional sport catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

//! Environment-based planner configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use moveframe_core::config::{SportFieldCatalog, SportFieldConfig};
use moveframe_core::constants::defaults;
use moveframe_core::errors::{AppError, AppResult, ErrorCode};
use moveframe_core::models::SportType;
use moveframe_engine::{
    normalize_common, CircuitMatrixGenerator, FieldKind, NormalizeOptions, RegenerationPolicy,
};

/// Sport used when none is given
pub const DEFAULT_SPORT_VAR: &str = "MOVEFRAME_DEFAULT_SPORT";
/// Default pause for generated circuit rows
pub const PAUSE_STATIONS_VAR: &str = "MOVEFRAME_PAUSE_STATIONS";
/// `preserve` or `discard`
pub const REGENERATION_POLICY_VAR: &str = "MOVEFRAME_REGENERATION_POLICY";
/// `emoji`, `icon` or `image`
pub const ICON_STYLE_VAR: &str = "MOVEFRAME_ICON_STYLE";
/// Path to a JSON sport catalog
pub const SPORT_CATALOG_VAR: &str = "MOVEFRAME_SPORT_CATALOG";

/// How sport icons are rendered by the UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// Unicode emoji
    #[default]
    Emoji,
    /// Icon font glyphs
    Icon,
    /// Bitmap images
    Image,
}

impl IconStyle {
    /// Parse with fallback to the default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "icon" | "icons" => Self::Icon,
            "image" | "images" | "png" => Self::Image,
            "emoji" => Self::Emoji,
            other => {
                warn!(value = other, "Unknown icon style, using emoji");
                Self::Emoji
            }
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emoji => write!(f, "emoji"),
            Self::Icon => write!(f, "icon"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// Planner configuration
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Sport used when none is given
    pub default_sport: SportType,
    /// Canonical default pause for circuit rows
    pub pause_stations: String,
    /// What circuit insertion does with entered values
    pub regeneration_policy: RegenerationPolicy,
    /// Display preference handed to the UI
    pub icon_style: IconStyle,
    /// Where the catalog was loaded from, `None` for the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Sport field configuration
    pub catalog: SportFieldCatalog,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_sport: SportType::Run,
            pause_stations: defaults::PAUSE_STATIONS.to_owned(),
            regeneration_policy: RegenerationPolicy::default(),
            icon_style: IconStyle::default(),
            catalog_path: None,
            catalog: SportFieldCatalog::builtin(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// Unparseable values fall back to their defaults with a warning.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `MOVEFRAME_SPORT_CATALOG` names a file
    /// that cannot be read or is not a valid catalog
    pub fn from_env() -> AppResult<Self> {
        let default_sport = parse_default_sport(&env_var_or(DEFAULT_SPORT_VAR, defaults::SPORT));
        let pause_stations =
            parse_pause_stations(&env_var_or(PAUSE_STATIONS_VAR, defaults::PAUSE_STATIONS));
        let regeneration_policy =
            parse_regeneration_policy(&env_var_or(REGENERATION_POLICY_VAR, "preserve"));
        let icon_style = IconStyle::from_str_or_default(&env_var_or(ICON_STYLE_VAR, "emoji"));

        let catalog_path = env::var(SPORT_CATALOG_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let catalog = match &catalog_path {
            Some(path) => load_catalog(path)?,
            None => SportFieldCatalog::builtin(),
        };

        if catalog.get(default_sport).is_err() {
            warn!(
                sport = %default_sport,
                "Default sport is missing from the sport catalog"
            );
        }

        let config = Self {
            default_sport,
            pause_stations,
            regeneration_policy,
            icon_style,
            catalog_path,
            catalog,
        };
        info!("{}", config.summary());
        Ok(config)
    }

    /// Field configuration for `sport`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the catalog does not cover `sport`
    pub fn sport_config(&self, sport: SportType) -> AppResult<&SportFieldConfig> {
        self.catalog.get(sport)
    }

    /// Circuit generator seeded with the configured pause and policy
    #[must_use]
    pub fn circuit_generator(&self) -> CircuitMatrixGenerator {
        CircuitMatrixGenerator::new(&self.pause_stations).with_policy(self.regeneration_policy)
    }

    /// One-line description for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Planner configuration: sport={}, pause_stations={}, regeneration={}, icons={}, catalog={} ({} sports)",
            self.default_sport,
            self.pause_stations,
            self.regeneration_policy,
            self.icon_style,
            self.catalog_path
                .as_deref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            self.catalog.len()
        )
    }
}

/// Read and validate a catalog file
///
/// # Errors
///
/// Returns `ConfigError` when the file cannot be read and `ConfigInvalid`
/// when it does not hold a valid catalog
pub fn load_catalog(path: &Path) -> AppResult<SportFieldCatalog> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("Cannot read sport catalog {}: {e}", path.display()))
            .with_source(e)
    })?;
    SportFieldCatalog::from_json(&text).map_err(|e| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid sport catalog {}: {}", path.display(), e.message),
        )
        .with_source(e)
    })
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_default_sport(value: &str) -> SportType {
    value.parse().unwrap_or_else(|_| {
        warn!(value, "Unknown default sport, using {}", defaults::SPORT);
        SportType::Run
    })
}

fn parse_pause_stations(value: &str) -> String {
    match normalize_common(FieldKind::Pause, value, NormalizeOptions::default()) {
        Ok(outcome) if !outcome.is_rejected() => outcome.into_value(),
        _ => {
            warn!(value, "Unparseable pause for stations, using default");
            defaults::PAUSE_STATIONS.to_owned()
        }
    }
}

fn parse_regeneration_policy(value: &str) -> RegenerationPolicy {
    value.parse().unwrap_or_else(|_| {
        warn!(value, "Unknown regeneration policy, preserving edits");
        RegenerationPolicy::PreserveEdits
    })
}
