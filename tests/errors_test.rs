// ABOUTME: Integration tests for the unified error type and its machine-readable envelope
// ABOUTME: Checks exit codes, error constructors, JSON serialization and conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use moveframe_planner::errors::{AppError, ErrorCode, ErrorResponse};
use moveframe_planner::models::SportType;
use serde_json::json;

#[test]
fn test_exit_codes_by_family() {
    assert_eq!(AppError::invalid_input("bad").exit_code(), 2);
    assert_eq!(AppError::value_out_of_range("series", 0, 1, 99).exit_code(), 2);
    assert_eq!(AppError::not_found("Plan row 7").exit_code(), 3);
    assert_eq!(AppError::config("unreadable").exit_code(), 4);
    assert_eq!(AppError::internal("boom").exit_code(), 1);
}

#[test]
fn test_value_out_of_range_details() {
    let error = AppError::value_out_of_range("stations", 100, 1, 99);
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.details["field"], "stations");
    assert_eq!(error.details["min"], 1);
    assert_eq!(error.details["max"], 99);
}

#[test]
fn test_unsupported_field_names_sport_and_field() {
    let error = AppError::unsupported_field(SportType::Yoga, "pace");
    assert_eq!(error.code, ErrorCode::UnsupportedField);
    assert!(error.message.contains("pace"));
    assert!(error.message.contains(&SportType::Yoga.to_string()));
}

#[test]
fn test_error_response_envelope() {
    let response = ErrorResponse::from(AppError::not_found("Sport 'curling'"));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["error"]["code"], "RESOURCE_NOT_FOUND");
    assert!(value["error"]["message"]
        .as_str()
        .unwrap()
        .contains("curling"));
    assert!(value["error"].get("details").is_none());

    let detailed = AppError::invalid_format("bad row").with_details(json!({"row": 3}));
    let value = serde_json::to_value(ErrorResponse::from(detailed)).unwrap();
    assert_eq!(value["error"]["details"]["row"], 3);
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = AppError::from(io);
    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_anyhow_conversion_keeps_context() {
    let inner = std::io::Error::other("disk full");
    let wrapped = anyhow::Error::new(inner).context("writing circuit table");

    let error = AppError::from(wrapped);

    assert_eq!(error.code, ErrorCode::InternalError);
    assert_eq!(error.message, "writing circuit table");
    assert_eq!(error.details["source"], "disk full");

    let plain = AppError::from(anyhow::anyhow!("no context"));
    assert!(plain.details.is_null());
}
