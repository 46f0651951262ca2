// ABOUTME: Re-exports command modules for moveframe-cli
// ABOUTME: Provides normalize, range, plan, circuit and sports commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

pub mod circuit;
pub mod normalize;
pub mod plan;
pub mod range;
pub mod sports;
