// ABOUTME: Dispatch table mapping (sport, field kind) to a parser spec record
// ABOUTME: Encodes canonical shape, bounds and overflow policy for every temporal field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use moveframe_core::constants::temporal::{
    PACE_MAX_FULL, PACE_MAX_WHOLE_SECOND, REPS_TIME_MAX, REPS_TIME_MIN, RUN_KM_PACE_MIN,
    RUN_SHORT_PACE_MAX, SKI_PACE_MAX,
};
use moveframe_core::constants::units::TENTHS_PER_HOUR;
use moveframe_core::errors::{AppError, AppResult};
use moveframe_core::models::{SportCategory, SportType};

use super::{FieldKind, NormalizeOptions};

/// Canonical output shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `HhMM'SS"T`
    Duration,
    /// `M'SS"T`
    MinSecTenths,
    /// `M'SS"`
    MinSec,
    /// `D.D`
    Decimal,
}

impl Shape {
    /// Slot layout of the shape, `None` for decimals which parse as a float
    pub(crate) const fn slots(self) -> Option<Slots> {
        match self {
            Self::Duration => Some(Slots::Duration),
            Self::MinSecTenths => Some(Slots::MinSecTenths),
            Self::MinSec => Some(Slots::MinSec),
            Self::Decimal => None,
        }
    }
}

/// Digit slots of the temporal shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slots {
    /// hours, minutes, seconds, tenths
    Duration,
    /// one minute digit, seconds, tenths
    MinSecTenths,
    /// minutes, seconds
    MinSec,
}

/// What happens when a parsed value falls outside its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Return the raw input unchanged
    Reject,
    /// Snap up to the minimum when below it; reject above the maximum
    SnapToMin,
    /// Substitute the nearest bound silently
    Saturate,
    /// Clamp an overflowing seconds slot to 59 silently
    ClampSeconds,
    /// Notify the user, then substitute the nearest bound
    NotifyAndClamp,
}

/// Parser record for one (sport, field) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserSpec {
    /// Field label used in notices and logs
    pub label: &'static str,
    /// Output shape
    pub shape: Shape,
    /// Lower bound in tenths of a second (or tenths of a unit for decimals)
    pub min: u64,
    /// Upper bound, `None` when unbounded
    pub max: Option<u64>,
    /// Out-of-range handling
    pub policy: OverflowPolicy,
}

#[derive(Debug, Clone, Copy)]
enum SportMatch {
    Sport(SportType),
    RunKmPace,
    AnyDistance,
    Any,
}

impl SportMatch {
    fn matches(self, sport: SportType, category: SportCategory, options: NormalizeOptions) -> bool {
        match self {
            Self::Sport(wanted) => wanted == sport,
            Self::RunKmPace => sport == SportType::Run && options.km_pace,
            Self::AnyDistance => category == SportCategory::Distance,
            Self::Any => true,
        }
    }
}

struct DispatchEntry {
    sport: SportMatch,
    field: FieldKind,
    spec: ParserSpec,
}

/// First matching entry wins, so specific sports precede the catch-alls.
const DISPATCH: &[DispatchEntry] = &[
    DispatchEntry {
        sport: SportMatch::Sport(SportType::Bike),
        field: FieldKind::Pace,
        spec: ParserSpec {
            label: "speed",
            shape: Shape::Decimal,
            min: 0,
            max: None,
            policy: OverflowPolicy::Saturate,
        },
    },
    DispatchEntry {
        sport: SportMatch::Sport(SportType::Rowing),
        field: FieldKind::Pace,
        spec: ParserSpec {
            label: "pace per 500m",
            shape: Shape::MinSecTenths,
            min: 0,
            max: Some(PACE_MAX_FULL),
            policy: OverflowPolicy::Reject,
        },
    },
    DispatchEntry {
        sport: SportMatch::Sport(SportType::Ski),
        field: FieldKind::Pace,
        spec: ParserSpec {
            label: "pace",
            shape: Shape::MinSec,
            min: 0,
            max: Some(SKI_PACE_MAX),
            policy: OverflowPolicy::Reject,
        },
    },
    DispatchEntry {
        sport: SportMatch::RunKmPace,
        field: FieldKind::Pace,
        spec: ParserSpec {
            label: "pace per km",
            shape: Shape::MinSecTenths,
            min: RUN_KM_PACE_MIN,
            max: Some(PACE_MAX_FULL),
            policy: OverflowPolicy::SnapToMin,
        },
    },
    DispatchEntry {
        sport: SportMatch::Sport(SportType::Run),
        field: FieldKind::Pace,
        spec: ParserSpec {
            label: "pace",
            shape: Shape::MinSecTenths,
            min: 0,
            max: Some(RUN_SHORT_PACE_MAX),
            policy: OverflowPolicy::Reject,
        },
    },
    DispatchEntry {
        sport: SportMatch::AnyDistance,
        field: FieldKind::Pace,
        spec: ParserSpec {
            label: "pace",
            shape: Shape::MinSecTenths,
            min: 0,
            max: Some(PACE_MAX_WHOLE_SECOND),
            policy: OverflowPolicy::Reject,
        },
    },
    DispatchEntry {
        sport: SportMatch::Any,
        field: FieldKind::Time,
        spec: ParserSpec {
            label: "time",
            shape: Shape::Duration,
            min: 0,
            max: Some(9 * TENTHS_PER_HOUR),
            policy: OverflowPolicy::Saturate,
        },
    },
    DispatchEntry {
        sport: SportMatch::Any,
        field: FieldKind::Pause,
        spec: ParserSpec {
            label: "pause",
            shape: Shape::MinSec,
            min: 0,
            max: None,
            policy: OverflowPolicy::ClampSeconds,
        },
    },
    DispatchEntry {
        sport: SportMatch::Any,
        field: FieldKind::RepsTime,
        spec: ParserSpec {
            label: "reps time",
            shape: Shape::MinSec,
            min: REPS_TIME_MIN,
            max: Some(REPS_TIME_MAX),
            policy: OverflowPolicy::NotifyAndClamp,
        },
    },
];

impl ParserSpec {
    /// Look up the parser record for a sport and field
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedField` when the field does not exist for the sport
    /// (a pace on a strength or tool sport)
    pub fn resolve(
        sport: SportType,
        category: SportCategory,
        field: FieldKind,
        options: NormalizeOptions,
    ) -> AppResult<Self> {
        DISPATCH
            .iter()
            .find(|entry| entry.field == field && entry.sport.matches(sport, category, options))
            .map(|entry| entry.spec)
            .ok_or_else(|| AppError::unsupported_field(sport, field))
    }

    /// Record for fields that exist on every sport (time, pause, reps-time)
    ///
    /// Returns `None` for pace, which depends on the sport.
    #[must_use]
    pub fn sport_independent(field: FieldKind) -> Option<Self> {
        DISPATCH
            .iter()
            .find(|entry| entry.field == field && matches!(entry.sport, SportMatch::Any))
            .map(|entry| entry.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pace(sport: SportType, km_pace: bool) -> AppResult<ParserSpec> {
        ParserSpec::resolve(
            sport,
            sport.category(),
            FieldKind::Pace,
            NormalizeOptions {
                km_pace,
                ..NormalizeOptions::default()
            },
        )
    }

    #[test]
    fn test_specific_sports_win_over_catch_all() {
        assert_eq!(pace(SportType::Bike, false).unwrap().shape, Shape::Decimal);
        assert_eq!(pace(SportType::Ski, false).unwrap().shape, Shape::MinSec);
        assert_eq!(
            pace(SportType::Rowing, false).unwrap().max,
            Some(PACE_MAX_FULL)
        );
        assert_eq!(
            pace(SportType::Swim, false).unwrap().max,
            Some(PACE_MAX_WHOLE_SECOND)
        );
    }

    #[test]
    fn test_run_km_mode_changes_bounds() {
        let km = pace(SportType::Run, true).unwrap();
        assert_eq!(km.min, RUN_KM_PACE_MIN);
        assert_eq!(km.policy, OverflowPolicy::SnapToMin);

        let short = pace(SportType::Run, false).unwrap();
        assert_eq!(short.max, Some(RUN_SHORT_PACE_MAX));
        assert_eq!(short.policy, OverflowPolicy::Reject);
    }

    #[test]
    fn test_km_option_ignored_for_other_sports() {
        assert_eq!(
            pace(SportType::Canoeing, true).unwrap(),
            pace(SportType::Canoeing, false).unwrap()
        );
    }

    #[test]
    fn test_pace_is_unsupported_for_non_distance_sports() {
        assert!(pace(SportType::BodyBuilding, false).is_err());
        assert!(pace(SportType::Stretching, false).is_err());
    }

    #[test]
    fn test_sport_independent_fields() {
        assert!(ParserSpec::sport_independent(FieldKind::Pace).is_none());
        assert_eq!(
            ParserSpec::sport_independent(FieldKind::Time).unwrap().shape,
            Shape::Duration
        );
        assert_eq!(
            ParserSpec::sport_independent(FieldKind::RepsTime)
                .unwrap()
                .policy,
            OverflowPolicy::NotifyAndClamp
        );
    }
}
