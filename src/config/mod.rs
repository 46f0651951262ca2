// ABOUTME: Configuration module for planner settings loaded from the environment
// ABOUTME: Exposes PlannerConfig, IconStyle and sport catalog loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

/// Environment-based planner configuration
pub mod environment;

pub use environment::{load_catalog, IconStyle, PlannerConfig};
