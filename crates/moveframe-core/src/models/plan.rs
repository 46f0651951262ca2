// ABOUTME: Individual plan rows for per-repetition moveframe planning
// ABOUTME: Defines IndividualPlanRow, PlanField and PlanningMode with field accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::sport::SportCategory;
use crate::errors::AppError;

/// Whether repetitions share one parameter set or each has its own row
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanningMode {
    /// All repetitions share the moveframe-level parameters
    #[default]
    All,
    /// Each repetition carries its own [`IndividualPlanRow`]
    Individual,
}

/// Editable fields of an [`IndividualPlanRow`]
///
/// `index` is not a field: it identifies the row and is never edited or
/// propagated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PlanField {
    /// Speed label
    Speed,
    /// Duration (`HhMM'SS"T`)
    Time,
    /// Strokes or rows per minute
    Strokes,
    /// Power target
    Watts,
    /// Rest after the repetition
    Pause,
    /// Rest type (active, passive, ...)
    RestType,
    /// Minimum rest
    PauseMin,
    /// How the rest is measured
    PauseMode,
    /// Pace to hold during active rest
    PausePace,
    /// Repetitions
    Reps,
    /// Load
    Weight,
    /// Tools used
    Tools,
}

impl PlanField {
    /// Every editable field, in row order
    pub const ALL: [Self; 12] = [
        Self::Speed,
        Self::Time,
        Self::Strokes,
        Self::Watts,
        Self::Pause,
        Self::RestType,
        Self::PauseMin,
        Self::PauseMode,
        Self::PausePace,
        Self::Reps,
        Self::Weight,
        Self::Tools,
    ];

    /// Camel-case name used in stored plans
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Time => "time",
            Self::Strokes => "strokes",
            Self::Watts => "watts",
            Self::Pause => "pause",
            Self::RestType => "restType",
            Self::PauseMin => "pauseMin",
            Self::PauseMode => "pauseMode",
            Self::PausePace => "pausePace",
            Self::Reps => "reps",
            Self::Weight => "weight",
            Self::Tools => "tools",
        }
    }

    /// Fields populated on fresh rows for a sport category
    #[must_use]
    pub const fn schema_for(category: SportCategory) -> &'static [Self] {
        match category {
            SportCategory::Distance => &[Self::Speed, Self::Time, Self::Strokes, Self::Watts],
            SportCategory::Strength => &[Self::Reps, Self::Weight],
            SportCategory::Tool => &[Self::Reps, Self::Tools],
        }
    }
}

impl fmt::Display for PlanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlanField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown plan field '{s}'")))
    }
}

/// One repetition's parameters in individual planning mode
///
/// Absent (`None`) fields are left untouched by propagation; present fields,
/// even empty strings, are copied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualPlanRow {
    /// Zero-based repetition index
    pub index: usize,
    /// Speed label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    /// Duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Strokes per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<String>,
    /// Power target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts: Option<String>,
    /// Rest after the repetition
    #[serde(default)]
    pub pause: String,
    /// Rest type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_type: Option<String>,
    /// Minimum rest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_min: Option<String>,
    /// Rest measurement mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_mode: Option<String>,
    /// Pace during active rest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_pace: Option<String>,
    /// Repetitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<String>,
}

impl IndividualPlanRow {
    /// Fresh row carrying the schema subset of `category`, all empty
    #[must_use]
    pub fn blank(index: usize, category: SportCategory, pause: &str) -> Self {
        let mut row = Self {
            index,
            pause: pause.to_owned(),
            ..Self::default()
        };
        for field in PlanField::schema_for(category) {
            row.set(*field, String::new());
        }
        row
    }

    /// Current value of a field, `None` when absent
    #[must_use]
    pub fn get(&self, field: PlanField) -> Option<&str> {
        match field {
            PlanField::Pause => Some(self.pause.as_str()),
            PlanField::Speed => self.speed.as_deref(),
            PlanField::Time => self.time.as_deref(),
            PlanField::Strokes => self.strokes.as_deref(),
            PlanField::Watts => self.watts.as_deref(),
            PlanField::RestType => self.rest_type.as_deref(),
            PlanField::PauseMin => self.pause_min.as_deref(),
            PlanField::PauseMode => self.pause_mode.as_deref(),
            PlanField::PausePace => self.pause_pace.as_deref(),
            PlanField::Reps => self.reps.as_deref(),
            PlanField::Weight => self.weight.as_deref(),
            PlanField::Tools => self.tools.as_deref(),
        }
    }

    /// Overwrite a field
    pub fn set(&mut self, field: PlanField, value: String) {
        match field {
            PlanField::Pause => self.pause = value,
            PlanField::Speed => self.speed = Some(value),
            PlanField::Time => self.time = Some(value),
            PlanField::Strokes => self.strokes = Some(value),
            PlanField::Watts => self.watts = Some(value),
            PlanField::RestType => self.rest_type = Some(value),
            PlanField::PauseMin => self.pause_min = Some(value),
            PlanField::PauseMode => self.pause_mode = Some(value),
            PlanField::PausePace => self.pause_pace = Some(value),
            PlanField::Reps => self.reps = Some(value),
            PlanField::Weight => self.weight = Some(value),
            PlanField::Tools => self.tools = Some(value),
        }
    }
}
