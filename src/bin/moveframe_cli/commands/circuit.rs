// ABOUTME: Circuit table commands for moveframe-cli
// ABOUTME: Generates fresh circuit tables and inserts circuits into existing ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use std::path::Path;
use tracing::info;

use moveframe_planner::config::PlannerConfig;
use moveframe_planner::engine::{
    CircuitMatrixGenerator, CircuitTable, InsertPosition, InsertRequest, RegenerationPolicy,
};
use moveframe_planner::errors::AppResult;

use crate::helpers::display::print_json;
use crate::helpers::files::read_json;

/// Print a fresh table
pub fn generate(
    config: &PlannerConfig,
    circuits: usize,
    series: u32,
    stations: u32,
    pause: Option<&str>,
) -> AppResult<()> {
    let generator = pause.map_or_else(
        || config.circuit_generator(),
        |pause| CircuitMatrixGenerator::new(pause).with_policy(config.regeneration_policy),
    );
    let table = generator.build(circuits, series, stations)?;
    info!(
        circuits,
        rows = table.rows.len(),
        pause = generator.pause_stations(),
        "Circuit table generated"
    );
    print_json(&table)
}

/// Insert circuits into the table stored at `table_path` and print the result
pub fn insert(
    config: &PlannerConfig,
    table_path: &Path,
    after: Option<&str>,
    count: usize,
    (series, stations): (u32, u32),
    discard_edits: bool,
) -> AppResult<()> {
    let table: CircuitTable = read_json(table_path)?;
    let policy = if discard_edits {
        RegenerationPolicy::Discard
    } else {
        config.regeneration_policy
    };
    let request = InsertRequest {
        position: InsertPosition::from_letter(after),
        count,
        series,
        stations,
    };
    let result = config
        .circuit_generator()
        .with_policy(policy)
        .insert(&table, &request)?;
    print_json(&result)
}
