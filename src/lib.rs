// ABOUTME: Main library entry point for the Moveframe workout planner
// ABOUTME: Wires environment configuration, logging and the moveframe editing session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

#![deny(unsafe_code)]

//! # Moveframe Planner
//!
//! Sport-aware input handling for workout planning. The pure parts live in
//! two workspace crates:
//!
//! - **`moveframe_core`**: errors, constants, sports, plan rows, circuit models
//! - **`moveframe_engine`**: normalizers, propagator, circuit generator
//!
//! This crate adds what a running planner needs around them:
//!
//! - **config**: `PlannerConfig` from `MOVEFRAME_*` environment variables
//! - **logging**: tracing subscriber setup
//! - **editor**: the editing session owning one moveframe's rows and circuits
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use moveframe_planner::config::PlannerConfig;
//! use moveframe_planner::editor::MoveframeEditor;
//! use moveframe_planner::errors::AppResult;
//! use moveframe_planner::models::{PlanField, PlanningMode, SportType};
//!
//! fn main() -> AppResult<()> {
//!     let config = PlannerConfig::from_env()?;
//!     let mut editor = MoveframeEditor::for_sport(&config, SportType::Rowing)?;
//!     editor.set_repetitions(4);
//!     editor.set_mode(PlanningMode::Individual);
//!     let outcome = editor.edit_field(0, PlanField::Speed, "1305")?;
//!     println!("{}", outcome.display_value());
//!     editor.copy_down(0);
//!     Ok(())
//! }
//! ```

/// Planner configuration loaded from the environment
pub mod config;

/// Moveframe editing session
pub mod editor;

/// Structured logging setup
pub mod logging;

pub use moveframe_core::{constants, errors, models};
pub use moveframe_engine as engine;
