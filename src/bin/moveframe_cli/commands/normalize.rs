// ABOUTME: Normalize command for moveframe-cli
// ABOUTME: Runs one raw value through the sport-aware temporal normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde_json::json;
use tracing::info;

use moveframe_planner::config::PlannerConfig;
use moveframe_planner::engine::{normalize, FieldKind, NormalizeOptions};
use moveframe_planner::errors::AppResult;
use moveframe_planner::models::SportType;

use crate::helpers::display::print_json;

/// Normalize `raw` for `field` of `sport`
pub fn run(
    config: &PlannerConfig,
    sport: SportType,
    field: FieldKind,
    km_pace: bool,
    live_typing: bool,
    raw: &str,
) -> AppResult<()> {
    let sport_config = config.sport_config(sport)?;
    let options = NormalizeOptions {
        km_pace,
        live_typing,
    };
    let outcome = normalize(sport_config, field, raw, options)?;
    info!(sport = %sport, field = %field, "Normalized input");

    print_json(&json!({
        "sport": sport,
        "field": field,
        "raw": raw,
        "display": outcome.display_value(),
        "result": outcome,
    }))
}
