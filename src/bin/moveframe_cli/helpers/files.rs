// ABOUTME: Input file helpers for moveframe-cli
// ABOUTME: Reads plan rows and circuit tables from JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

use moveframe_planner::errors::{AppError, AppResult};

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    debug!(path = %path.display(), "Reading input file");
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&text).map_err(|e| {
        AppError::invalid_format(format!("{} is not valid input: {e}", path.display()))
            .with_source(e)
    })
}
