// ABOUTME: Sports command for moveframe-cli
// ABOUTME: Prints the field configuration of one sport or of the whole catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use moveframe_planner::config::PlannerConfig;
use moveframe_planner::errors::AppResult;
use moveframe_planner::models::SportType;

use crate::helpers::display::print_json;

/// Print catalog entries
pub fn show(config: &PlannerConfig, sport: Option<SportType>) -> AppResult<()> {
    match sport {
        Some(sport) => print_json(config.sport_config(sport)?),
        None => {
            let all: Vec<_> = config.catalog.iter().collect();
            print_json(&all)
        }
    }
}
