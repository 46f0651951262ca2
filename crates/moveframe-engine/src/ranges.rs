// ABOUTME: Numeric range guard for strokes per minute, reps, pulse and weight fields
// ABOUTME: Accepts in-range integers, echoes non-numeric input, notifies then clamps otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::{debug, info};

use moveframe_core::constants::numeric::{
    PULSE_MAX, PULSE_MIN, REPS_MAX, REPS_MIN, ROW_PER_MINUTE_MAX, ROW_PER_MINUTE_MIN, WEIGHT_MAX,
    WEIGHT_MIN,
};
use moveframe_core::errors::AppError;

use crate::normalizer::{Outcome, RangeNotice};

/// Integer field with hard domain bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericField {
    /// Strokes or rows per minute
    RowPerMinute,
    /// Repetitions
    Reps,
    /// Heart rate
    Pulse,
    /// Load
    Weight,
}

impl NumericField {
    /// Inclusive bounds
    #[must_use]
    pub const fn bounds(self) -> (u32, u32) {
        match self {
            Self::RowPerMinute => (ROW_PER_MINUTE_MIN, ROW_PER_MINUTE_MAX),
            Self::Reps => (REPS_MIN, REPS_MAX),
            Self::Pulse => (PULSE_MIN, PULSE_MAX),
            Self::Weight => (WEIGHT_MIN, WEIGHT_MAX),
        }
    }

    /// Label shown in notices
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RowPerMinute => "row per minute",
            Self::Reps => "reps",
            Self::Pulse => "pulse",
            Self::Weight => "weight",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NumericField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "rowperminute" | "strokes" | "rpm" => Ok(Self::RowPerMinute),
            "reps" => Ok(Self::Reps),
            "pulse" | "hr" => Ok(Self::Pulse),
            "weight" => Ok(Self::Weight),
            _ => Err(AppError::invalid_input(format!(
                "Unknown numeric field '{s}', expected row-per-minute, reps, pulse or weight"
            ))),
        }
    }
}

/// Validate an integer field
///
/// Blank or non-numeric text is echoed back; values outside the field's
/// bounds snap to the nearest bound with a [`RangeNotice`].
#[must_use]
pub fn check_range(field: NumericField, raw: &str) -> Outcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        debug!(field = field.label(), raw, "Non-numeric input echoed back");
        return Outcome::rejected(raw);
    }

    let (min, max) = field.bounds();
    let value = match trimmed.parse::<u32>() {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => return Outcome::rejected(raw),
    };

    let clamped = value.clamp(min, max);
    if clamped == value {
        return Outcome::accepted(value.to_string());
    }

    info!(
        field = field.label(),
        raw,
        clamped,
        "Numeric value out of range, clamped after notice"
    );
    let notice = RangeNotice::new(field.label(), trimmed, min.to_string(), max.to_string());
    Outcome::notify_clamped(clamped.to_string(), notice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_are_normalized() {
        assert_eq!(check_range(NumericField::Reps, " 012 "), Outcome::accepted("12"));
        assert_eq!(check_range(NumericField::Weight, "0"), Outcome::accepted("0"));
    }

    #[test]
    fn test_bounds_notify_and_clamp() {
        let low = check_range(NumericField::Pulse, "40");
        assert_eq!(low.display_value(), "60");
        assert_eq!(low.notice().unwrap().attempted, "40");

        let high = check_range(NumericField::RowPerMinute, "120");
        assert_eq!(high.display_value(), "99");

        let huge = check_range(NumericField::Weight, "99999999999999");
        assert_eq!(huge.display_value(), "9999");
    }

    #[test]
    fn test_non_numeric_is_echoed() {
        assert_eq!(check_range(NumericField::Reps, ""), Outcome::rejected(""));
        assert_eq!(check_range(NumericField::Reps, "1a"), Outcome::rejected("1a"));
        assert_eq!(check_range(NumericField::Reps, "-5"), Outcome::rejected("-5"));
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!(
            "row-per-minute".parse::<NumericField>().unwrap(),
            NumericField::RowPerMinute
        );
        assert_eq!("Pulse".parse::<NumericField>().unwrap(), NumericField::Pulse);
        assert!("speed".parse::<NumericField>().is_err());
    }
}
