// ABOUTME: Core types and constants for the Moveframe workout planner
// ABOUTME: Foundation crate with error handling, sport catalog, plan rows and circuit models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

#![deny(unsafe_code)]

//! # Moveframe Core
//!
//! Foundation crate providing shared types and constants for the Moveframe
//! planner. The engine crate and the planner binary both build on these types,
//! so this crate is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Field bounds, palettes and other static values
//! - **models**: Sports, plan rows, circuit exercises and rows
//! - **config**: Per-sport field configuration and the sport catalog

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`SportType`, `IndividualPlanRow`, `CircuitRow`, etc.)
pub mod models;

/// Sport field configuration and catalog
pub mod config;
