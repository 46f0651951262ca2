// ABOUTME: Validation outcomes returned by the normalizers and the numeric range guard
// ABOUTME: Distinguishes accept, reject-and-echo, silent clamp and notify-then-clamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde::{Deserialize, Serialize};

/// User-facing notification raised before a value is clamped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeNotice {
    /// Field label
    pub field: String,
    /// What the user typed
    pub attempted: String,
    /// Lowest accepted value, formatted
    pub min: String,
    /// Highest accepted value, formatted
    pub max: String,
    /// Message to show in the blocking dialog
    pub message: String,
}

impl RangeNotice {
    /// Notice for `field` bounded by `min..=max`
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        attempted: impl Into<String>,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let min = min.into();
        let max = max.into();
        let message = format!("{field} must be between {min} and {max}");
        Self {
            field,
            attempted: attempted.into(),
            min,
            max,
            message,
        }
    }
}

/// Result of validating one raw input
///
/// None of these are errors: the caller renders [`Outcome::display_value`]
/// and shows the notice when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Input parsed and is within bounds
    Accepted {
        /// Canonical value
        value: String,
    },
    /// Input is out of range or unparseable; keep showing what was typed
    Rejected {
        /// Input exactly as received
        raw: String,
    },
    /// Nearest valid value substituted silently
    Clamped {
        /// Canonical clamped value
        value: String,
    },
    /// Nearest valid value substituted after notifying the user
    NotifyClamped {
        /// Canonical clamped value
        value: String,
        /// Notification to surface
        notice: RangeNotice,
    },
}

impl Outcome {
    pub(crate) fn accepted(value: impl Into<String>) -> Self {
        Self::Accepted {
            value: value.into(),
        }
    }

    pub(crate) fn rejected(raw: impl Into<String>) -> Self {
        Self::Rejected { raw: raw.into() }
    }

    pub(crate) fn clamped(value: impl Into<String>) -> Self {
        Self::Clamped {
            value: value.into(),
        }
    }

    pub(crate) fn notify_clamped(value: impl Into<String>, notice: RangeNotice) -> Self {
        Self::NotifyClamped {
            value: value.into(),
            notice,
        }
    }

    /// Text the input box should show after this outcome
    #[must_use]
    pub fn display_value(&self) -> &str {
        match self {
            Self::Accepted { value } | Self::Clamped { value } | Self::NotifyClamped { value, .. } => {
                value
            }
            Self::Rejected { raw } => raw,
        }
    }

    /// Consume the outcome, keeping only the display text
    #[must_use]
    pub fn into_value(self) -> String {
        match self {
            Self::Accepted { value } | Self::Clamped { value } | Self::NotifyClamped { value, .. } => {
                value
            }
            Self::Rejected { raw } => raw,
        }
    }

    /// Whether the input was echoed back unchanged
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Whether a bound was substituted, silently or not
    #[must_use]
    pub const fn is_clamped(&self) -> bool {
        matches!(self, Self::Clamped { .. } | Self::NotifyClamped { .. })
    }

    /// Notification to surface, if any
    #[must_use]
    pub const fn notice(&self) -> Option<&RangeNotice> {
        match self {
            Self::NotifyClamped { notice, .. } => Some(notice),
            _ => None,
        }
    }
}
