// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field bounds, defaults and palettes for the Moveframe planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.
//! Temporal bounds are expressed in tenths of a second so every pace, time
//! and pause shape compares on the same scale.

/// Time unit conversions
pub mod units {
    /// Tenths of a second per second
    pub const TENTHS_PER_SECOND: u64 = 10;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: u64 = 60;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: u64 = 60;
    /// Tenths of a second per minute
    pub const TENTHS_PER_MINUTE: u64 = TENTHS_PER_SECOND * SECONDS_PER_MINUTE;
    /// Tenths of a second per hour
    pub const TENTHS_PER_HOUR: u64 = TENTHS_PER_MINUTE * MINUTES_PER_HOUR;
}

/// Bounds of the temporal shapes, in tenths of a second
pub mod temporal {
    use super::units::{TENTHS_PER_MINUTE, TENTHS_PER_SECOND};

    /// Largest seconds value allowed in any `SS` slot
    pub const MAX_SECONDS_SLOT: u64 = 59;
    /// Largest minutes value allowed in the `MM` slot of a duration
    pub const MAX_MINUTES_SLOT: u64 = 59;
    /// Hour digit saturation point for durations
    pub const MAX_DURATION_HOURS: u64 = 9;

    /// `9'59"9`: upper bound of ROWING and RUN km paces
    pub const PACE_MAX_FULL: u64 = 9 * TENTHS_PER_MINUTE + 59 * TENTHS_PER_SECOND + 9;
    /// `9'59"0`: upper bound of other distance-sport paces
    pub const PACE_MAX_WHOLE_SECOND: u64 = 9 * TENTHS_PER_MINUTE + 59 * TENTHS_PER_SECOND;
    /// `2'00"0`: minimum RUN pace per kilometer
    pub const RUN_KM_PACE_MIN: u64 = 2 * TENTHS_PER_MINUTE;
    /// `1'59"0`: upper bound of RUN paces over short distances
    pub const RUN_SHORT_PACE_MAX: u64 = TENTHS_PER_MINUTE + 59 * TENTHS_PER_SECOND;
    /// `9'59"`: upper bound of SKI paces
    pub const SKI_PACE_MAX: u64 = PACE_MAX_WHOLE_SECOND;

    /// `0'01"`: lower bound of reps-time
    pub const REPS_TIME_MIN: u64 = TENTHS_PER_SECOND;
    /// `9'59"`: upper bound of reps-time
    pub const REPS_TIME_MAX: u64 = PACE_MAX_WHOLE_SECOND;
}

/// Bounds of the plain numeric fields
pub mod numeric {
    /// Strokes (rows) per minute
    pub const ROW_PER_MINUTE_MIN: u32 = 10;
    /// Strokes (rows) per minute
    pub const ROW_PER_MINUTE_MAX: u32 = 99;
    /// Repetitions
    pub const REPS_MIN: u32 = 1;
    /// Repetitions
    pub const REPS_MAX: u32 = 99;
    /// Heart rate in beats per minute
    pub const PULSE_MIN: u32 = 60;
    /// Heart rate in beats per minute
    pub const PULSE_MAX: u32 = 200;
    /// Load in kilograms
    pub const WEIGHT_MIN: u32 = 0;
    /// Load in kilograms
    pub const WEIGHT_MAX: u32 = 9999;
}

/// Circuit table limits and defaults
pub mod circuits {
    /// Maximum series per circuit
    pub const MAX_SERIES: u32 = 99;
    /// Maximum stations per circuit
    pub const MAX_STATIONS: u32 = 99;
    /// Maximum circuits in one table, every label `A` through `ZZ`
    pub const MAX_CIRCUITS: usize = 702;
    /// Maximum circuits created by a single insertion
    pub const MAX_INSERT_COUNT: usize = 26;
    /// Colors assigned to synthesized circuits, cycled by position
    pub const PALETTE: [&str; 8] = [
        "#e53935", "#1e88e5", "#43a047", "#fb8c00", "#8e24aa", "#00acc1", "#fdd835", "#6d4c41",
    ];
}

/// Defaults used when configuration is absent
pub mod defaults {
    /// Default pause for generated circuit rows
    pub const PAUSE_STATIONS: &str = "0'30\"";
    /// Default sport identifier
    pub const SPORT: &str = "run";
    /// Default annotation background color
    pub const ANNOTATION_BACKGROUND: &str = "#ffffff";
    /// Default annotation text color
    pub const ANNOTATION_TEXT: &str = "#000000";
    /// Default annotation border color
    pub const ANNOTATION_BORDER: &str = "#cccccc";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Planner service name
    pub const MOVEFRAME_PLANNER: &str = "moveframe-planner";
}
