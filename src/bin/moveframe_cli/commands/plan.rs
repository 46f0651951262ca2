// ABOUTME: Individual plan commands for moveframe-cli
// ABOUTME: Propagates one plan row's values down the rows below it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use std::path::Path;
use tracing::info;

use moveframe_planner::engine::copy_down as propagate;
use moveframe_planner::errors::AppResult;
use moveframe_planner::models::IndividualPlanRow;

use crate::helpers::display::print_json;
use crate::helpers::files::read_json;

/// Copy row `from` of the plan in `rows_path` down and print the result
pub fn copy_down(rows_path: &Path, from: usize) -> AppResult<()> {
    let rows: Vec<IndividualPlanRow> = read_json(rows_path)?;
    let result = propagate(&rows, from);
    info!(rows = result.len(), from, "Plan rows propagated");
    print_json(&result)
}
