// ABOUTME: Sport type enumeration for planned moveframes
// ABOUTME: Defines supported sports, their category and parsing/display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// How a sport's parameters are planned
///
/// Every sport belongs to exactly one category, and the category decides
/// which plan fields and which normalizer rules apply to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportCategory {
    /// Has a canonical race distance; planned with speed, pace and time
    Distance,
    /// Planned with repetitions and load
    Strength,
    /// Planned with repetitions and tools (gymnastics, stretching, ...)
    Tool,
}

impl SportCategory {
    /// Whether pace fields exist for this category
    #[must_use]
    pub const fn has_pace(self) -> bool {
        matches!(self, Self::Distance)
    }
}

impl fmt::Display for SportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Distance => "distance",
            Self::Strength => "strength",
            Self::Tool => "tool",
        };
        f.write_str(name)
    }
}

/// Sports a moveframe can be planned for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Swimming
    Swim,
    /// Cycling
    Bike,
    /// Running
    Run,
    /// Rowing (on water or ergometer)
    Rowing,
    /// Canoeing
    Canoeing,
    /// Kayaking
    Kayaking,
    /// Cross-country skiing
    Ski,
    /// Skating
    Skate,
    /// Walking
    Walking,
    /// Hiking
    Hiking,

    /// Weight training
    BodyBuilding,

    /// Gymnastics
    Gymnastic,
    /// Stretching
    Stretching,
    /// Pilates
    Pilates,
    /// Yoga
    Yoga,
    /// Sport-specific technical drills
    TechnicalMoves,
    /// Free-form movement work
    FreeMoves,
}

impl SportType {
    /// All supported sports in catalog order
    pub const ALL: [Self; 17] = [
        Self::Swim,
        Self::Bike,
        Self::Run,
        Self::Rowing,
        Self::Canoeing,
        Self::Kayaking,
        Self::Ski,
        Self::Skate,
        Self::Walking,
        Self::Hiking,
        Self::BodyBuilding,
        Self::Gymnastic,
        Self::Stretching,
        Self::Pilates,
        Self::Yoga,
        Self::TechnicalMoves,
        Self::FreeMoves,
    ];

    /// Category this sport belongs to
    #[must_use]
    pub const fn category(self) -> SportCategory {
        match self {
            Self::Swim
            | Self::Bike
            | Self::Run
            | Self::Rowing
            | Self::Canoeing
            | Self::Kayaking
            | Self::Ski
            | Self::Skate
            | Self::Walking
            | Self::Hiking => SportCategory::Distance,
            Self::BodyBuilding => SportCategory::Strength,
            Self::Gymnastic
            | Self::Stretching
            | Self::Pilates
            | Self::Yoga
            | Self::TechnicalMoves
            | Self::FreeMoves => SportCategory::Tool,
        }
    }

    /// Upper-case identifier used by the planner backend (`"BODY_BUILDING"`)
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Swim => "SWIM",
            Self::Bike => "BIKE",
            Self::Run => "RUN",
            Self::Rowing => "ROWING",
            Self::Canoeing => "CANOEING",
            Self::Kayaking => "KAYAKING",
            Self::Ski => "SKI",
            Self::Skate => "SKATE",
            Self::Walking => "WALKING",
            Self::Hiking => "HIKING",
            Self::BodyBuilding => "BODY_BUILDING",
            Self::Gymnastic => "GYMNASTIC",
            Self::Stretching => "STRETCHING",
            Self::Pilates => "PILATES",
            Self::Yoga => "YOGA",
            Self::TechnicalMoves => "TECHNICAL_MOVES",
            Self::FreeMoves => "FREE_MOVES",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Swim => "swim",
            Self::Bike => "bike",
            Self::Run => "run",
            Self::Rowing => "rowing",
            Self::Canoeing => "canoeing",
            Self::Kayaking => "kayaking",
            Self::Ski => "cross-country ski",
            Self::Skate => "skate",
            Self::Walking => "walking",
            Self::Hiking => "hiking",
            Self::BodyBuilding => "body building",
            Self::Gymnastic => "gymnastic",
            Self::Stretching => "stretching",
            Self::Pilates => "pilates",
            Self::Yoga => "yoga",
            Self::TechnicalMoves => "technical moves",
            Self::FreeMoves => "free moves",
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for SportType {
    type Err = AppError;

    /// Accepts backend identifiers (`"BODY_BUILDING"`) and snake case (`"body_building"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|sport| sport.identifier() == wanted)
            .ok_or_else(|| AppError::not_found(format!("Sport '{s}'")))
    }
}
