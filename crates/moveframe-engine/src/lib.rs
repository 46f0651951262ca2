// ABOUTME: Input engine for moveframe planning: normalizers, propagator and circuit generator
// ABOUTME: Pure transformations over raw input and plan tables with no I/O or shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

#![deny(unsafe_code)]

//! # Moveframe Engine
//!
//! - **normalizer**: sport-aware parsing of time, pace, pause and reps-time
//! - **ranges**: hard bounds for strokes per minute, reps, pulse and weight
//! - **propagator**: copy one repetition's parameters down the plan
//! - **circuit**: circuit x series x station matrix generation and insertion
//!
//! Every function returns a value; validation failures are [`Outcome`]s,
//! never errors.

/// Temporal and pace normalizer
pub mod normalizer;

/// Numeric range guard
pub mod ranges;

/// Individual-plan propagator
pub mod propagator;

/// Circuit matrix generator
pub mod circuit;

pub use circuit::{
    CircuitMatrixGenerator, CircuitTable, InsertPosition, InsertRequest, RegenerationPolicy,
};
pub use normalizer::{
    format_pause, format_reps_time, format_time, normalize, normalize_common, normalize_sport,
    FieldKind, NormalizeOptions, Outcome, RangeNotice,
};
pub use propagator::{copy_down, copy_down_in_place};
pub use ranges::{check_range, NumericField};
