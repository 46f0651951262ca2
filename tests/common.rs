// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, plan row builders and circuit table helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `moveframe_planner`

use std::sync::Once;

use moveframe_planner::engine::{CircuitMatrixGenerator, CircuitTable};
use moveframe_planner::models::{IndividualPlanRow, SportCategory};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// `count` blank rows for a sport category
pub fn plan_rows(count: usize, category: SportCategory) -> Vec<IndividualPlanRow> {
    (0..count)
        .map(|index| IndividualPlanRow::blank(index, category, "0'30\""))
        .collect()
}

/// Fresh table with the default pause
pub fn circuit_table(circuits: usize, series: u32, stations: u32) -> CircuitTable {
    CircuitMatrixGenerator::default()
        .build(circuits, series, stations)
        .unwrap()
}

/// `(circuit, series, station)` of every row, in order
pub fn cells(table: &CircuitTable) -> Vec<(String, u32, u32)> {
    table
        .rows
        .iter()
        .map(|row| (row.circuit.clone(), row.series, row.station))
        .collect()
}
