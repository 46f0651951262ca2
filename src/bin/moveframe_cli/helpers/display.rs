// ABOUTME: Output formatting helpers for moveframe-cli
// ABOUTME: Prints results as pretty JSON on stdout and errors as JSON envelopes on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde::Serialize;

use moveframe_planner::errors::{AppError, AppResult, ErrorResponse, ErrorResponseDetails};

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}

/// Print an error envelope on stderr
pub fn print_error(error: &AppError) {
    let response = ErrorResponse {
        error: ErrorResponseDetails {
            code: error.code,
            message: error.message.clone(),
            details: error.details.clone(),
        },
    };
    match serde_json::to_string_pretty(&response) {
        Ok(text) => eprintln!("{text}"),
        Err(_) => eprintln!("{error}"),
    }
}
