// ABOUTME: Re-exports helper modules for moveframe-cli
// ABOUTME: Provides JSON output and input file helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

pub mod display;
pub mod files;
