// ABOUTME: Annotation color settings stored alongside workout sections
// ABOUTME: Parses stored JSON and degrades to the default palette on malformed data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::defaults;

/// Colors used to render a moveframe annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationColors {
    /// Background color
    pub background: String,
    /// Text color
    pub text: String,
    /// Border color
    pub border: String,
}

impl Default for AnnotationColors {
    fn default() -> Self {
        Self {
            background: defaults::ANNOTATION_BACKGROUND.to_owned(),
            text: defaults::ANNOTATION_TEXT.to_owned(),
            border: defaults::ANNOTATION_BORDER.to_owned(),
        }
    }
}

impl AnnotationColors {
    /// Parse colors stored by the backend
    ///
    /// Blank, unparseable or incomplete JSON yields the default palette rather
    /// than an error.
    #[must_use]
    pub fn from_stored_json(stored: &str) -> Self {
        if stored.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(stored).unwrap_or_else(|e| {
            warn!(error = %e, "Malformed annotation colors, using defaults");
            Self::default()
        })
    }
}
