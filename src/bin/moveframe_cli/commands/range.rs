// ABOUTME: Range command for moveframe-cli
// ABOUTME: Checks a numeric field value against its hard bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde_json::json;

use moveframe_planner::engine::{check_range, NumericField};
use moveframe_planner::errors::AppResult;

use crate::helpers::display::print_json;

/// Check `raw` against the bounds of `field`
pub fn run(field: NumericField, raw: &str) -> AppResult<()> {
    let (min, max) = field.bounds();
    let outcome = check_range(field, raw);
    print_json(&json!({
        "field": field,
        "min": min,
        "max": max,
        "raw": raw,
        "display": outcome.display_value(),
        "result": outcome,
    }))
}
