// ABOUTME: Configuration types shared across the workspace
// ABOUTME: Contains SportFieldConfig and the SportFieldCatalog used by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

/// Per-sport field options and the sport catalog
pub mod sport_fields;

pub use sport_fields::{PauseOptions, SportFieldCatalog, SportFieldConfig};
