// ABOUTME: Core data models for the Moveframe planner
// ABOUTME: Re-exports sports, plan rows, circuit models and annotation colors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

//! # Data Models
//!
//! - `SportType` / `SportCategory`: which sport a moveframe is planned for
//! - `IndividualPlanRow`: per-repetition parameters in individual planning mode
//! - `CircuitExercise` / `CircuitRow`: the circuit x series x station table
//! - `AnnotationColors`: stored display colors, tolerant of bad data

mod annotation;
mod circuit;
mod plan;
mod sport;

pub use annotation::AnnotationColors;
pub use circuit::{circuit_letter, circuit_position, CircuitExercise, CircuitLayout, CircuitRow};
pub use plan::{IndividualPlanRow, PlanField, PlanningMode};
pub use sport::{SportCategory, SportType};
