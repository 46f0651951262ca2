// ABOUTME: Sport-aware normalizer for time, pace, pause and reps-time input
// ABOUTME: Resolves a parser spec from the dispatch table and applies it to raw user text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

//! # Temporal and Pace Normalizer
//!
//! Raw text typed into a temporal field is turned into a canonical string or
//! echoed back unchanged. Two parsing strategies exist: input containing a
//! separator (`. : ' " h`) is split into groups, bare digits are slotted
//! into the shape's fixed slots. Bounds and overflow handling come from the
//! [`ParserSpec`] for the `(sport, field)` pair.
//!
//! ```text
//! ROWING pace  "1305" -> 1'30"5
//! SKI pace     "245"  -> 2'45"
//! BIKE pace    "353"  -> 353.0
//! any time     "1234567" -> 9h00'00"0 (hour saturated)
//! ```

mod digits;
mod dispatch;
mod outcome;
mod temporal;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use moveframe_core::config::SportFieldConfig;
use moveframe_core::errors::{AppError, AppResult};
use moveframe_core::models::SportType;

pub use dispatch::{OverflowPolicy, ParserSpec, Shape};
pub use outcome::{Outcome, RangeNotice};

/// Temporal field being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// General duration, `HhMM'SS"T`
    Time,
    /// Sport-dependent pace or speed
    Pace,
    /// Short rest, `M'SS"`
    Pause,
    /// Bounded exercise duration, `M'SS"`
    RepsTime,
}

impl FieldKind {
    /// Name used on the wire and in notices
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Pace => "pace",
            Self::Pause => "pause",
            Self::RepsTime => "repsTime",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "time" => Ok(Self::Time),
            "pace" | "speed" => Ok(Self::Pace),
            "pause" | "rest" => Ok(Self::Pause),
            "repstime" => Ok(Self::RepsTime),
            _ => Err(AppError::invalid_input(format!(
                "Unknown field kind '{s}', expected time, pace, pause or reps-time"
            ))),
        }
    }
}

/// Caller-supplied switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// RUN pace is entered per kilometer
    pub km_pace: bool,
    /// Input arrives keystroke by keystroke rather than on blur
    pub live_typing: bool,
}

/// Normalize `raw` for a field of the sport described by `config`
///
/// The configured category decides which catch-all rules apply, so a custom
/// catalog can never give a tool sport a pace field.
///
/// # Errors
///
/// Returns `UnsupportedField` when the field does not exist for the sport.
/// Out-of-range input is never an error; see [`Outcome`].
pub fn normalize(
    config: &SportFieldConfig,
    field: FieldKind,
    raw: &str,
    options: NormalizeOptions,
) -> AppResult<Outcome> {
    let spec = ParserSpec::resolve(config.sport, config.category, field, options)?;
    Ok(temporal::apply(&spec, field, raw, options))
}

/// Normalize using the sport's own category
///
/// # Errors
///
/// Returns `UnsupportedField` when the field does not exist for the sport.
pub fn normalize_sport(
    sport: SportType,
    field: FieldKind,
    raw: &str,
    options: NormalizeOptions,
) -> AppResult<Outcome> {
    let spec = ParserSpec::resolve(sport, sport.category(), field, options)?;
    Ok(temporal::apply(&spec, field, raw, options))
}

/// Normalize a field that behaves the same for every sport
///
/// # Errors
///
/// Returns `UnsupportedField` for pace, which only exists per sport
pub fn normalize_common(
    field: FieldKind,
    raw: &str,
    options: NormalizeOptions,
) -> AppResult<Outcome> {
    let spec = ParserSpec::sport_independent(field)
        .ok_or_else(|| AppError::unsupported_field("every sport", field))?;
    Ok(temporal::apply(&spec, field, raw, options))
}

fn sport_independent(field: FieldKind, raw: &str) -> Outcome {
    normalize_common(field, raw, NormalizeOptions::default())
        .unwrap_or_else(|_| Outcome::rejected(raw))
}

/// Pause (rest) text for any sport, seconds clamped to 59
#[must_use]
pub fn format_pause(raw: &str) -> String {
    sport_independent(FieldKind::Pause, raw).into_value()
}

/// Duration for any sport
#[must_use]
pub fn format_time(raw: &str) -> Outcome {
    sport_independent(FieldKind::Time, raw)
}

/// Reps-time for any sport, notifying when clamped
#[must_use]
pub fn format_reps_time(raw: &str) -> Outcome {
    sport_independent(FieldKind::RepsTime, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pace(sport: SportType, raw: &str) -> Outcome {
        normalize_sport(sport, FieldKind::Pace, raw, NormalizeOptions::default()).unwrap()
    }

    #[test]
    fn test_field_kind_parsing() {
        assert_eq!("reps-time".parse::<FieldKind>().unwrap(), FieldKind::RepsTime);
        assert_eq!("repsTime".parse::<FieldKind>().unwrap(), FieldKind::RepsTime);
        assert_eq!("reps_time".parse::<FieldKind>().unwrap(), FieldKind::RepsTime);
        assert_eq!("PACE".parse::<FieldKind>().unwrap(), FieldKind::Pace);
        assert!("distance".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_sport_specific_paces() {
        assert_eq!(pace(SportType::Rowing, "1305").display_value(), "1'30\"5");
        assert_eq!(pace(SportType::Ski, "245").display_value(), "2'45\"");
        assert_eq!(pace(SportType::Bike, "353").display_value(), "353.0");
        assert_eq!(pace(SportType::Swim, "1305").display_value(), "1'30\"5");
    }

    #[test]
    fn test_generic_pace_max_has_no_tenths() {
        assert!(pace(SportType::Swim, "9599").is_rejected());
        assert_eq!(pace(SportType::Swim, "9590"), Outcome::accepted("9'59\"0"));
        assert_eq!(
            pace(SportType::Rowing, "9599"),
            Outcome::accepted("9'59\"9")
        );
    }

    #[test]
    fn test_pause_format_examples() {
        assert_eq!(format_pause("199"), "1'59\"");
        assert_eq!(format_pause("30"), "0'30\"");
        assert_eq!(format_pause("1234"), "12'34\"");
        assert_eq!(format_pause("x"), "x");
    }

    #[test]
    fn test_config_category_drives_dispatch() {
        let config = SportFieldConfig::builtin(SportType::Yoga);
        let err = normalize(&config, FieldKind::Pace, "130", NormalizeOptions::default())
            .unwrap_err();
        assert_eq!(
            err.code,
            moveframe_core::errors::ErrorCode::UnsupportedField
        );
        assert!(normalize(&config, FieldKind::Time, "130", NormalizeOptions::default()).is_ok());
    }
}
