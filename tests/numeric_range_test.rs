// ABOUTME: Integration tests for the numeric range guard on plan fields
// ABOUTME: Exercises every field's bounds, notices and echo-back of non-numeric input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use moveframe_planner::engine::{check_range, NumericField, Outcome};

#[test]
fn test_bounds_are_inclusive() {
    common::init_test_logging();
    let cases = [
        (NumericField::RowPerMinute, "10", "99"),
        (NumericField::Reps, "1", "99"),
        (NumericField::Pulse, "60", "200"),
        (NumericField::Weight, "0", "9999"),
    ];
    for (field, min, max) in cases {
        assert_eq!(check_range(field, min), Outcome::Accepted { value: min.into() });
        assert_eq!(check_range(field, max), Outcome::Accepted { value: max.into() });
    }
}

#[test]
fn test_out_of_range_notifies_with_bounds() {
    common::init_test_logging();
    let outcome = check_range(NumericField::RowPerMinute, "5");
    assert_eq!(outcome.display_value(), "10");

    let notice = outcome.notice().expect("notice");
    assert_eq!(notice.field, "row per minute");
    assert_eq!(notice.attempted, "5");
    assert_eq!(notice.min, "10");
    assert_eq!(notice.max, "99");
    assert_eq!(notice.message, "row per minute must be between 10 and 99");

    let outcome = check_range(NumericField::Pulse, "230");
    assert_eq!(outcome.display_value(), "200");
    assert!(outcome.is_clamped());
}

#[test]
fn test_zero_reps_clamps_to_one() {
    let outcome = check_range(NumericField::Reps, "0");
    assert_eq!(outcome.display_value(), "1");
    assert!(outcome.notice().is_some());
}

#[test]
fn test_non_numeric_input_is_kept() {
    for raw in ["", "  ", "abc", "12.5", "1 2"] {
        assert_eq!(
            check_range(NumericField::Weight, raw),
            Outcome::Rejected { raw: raw.into() }
        );
    }
}

#[test]
fn test_field_aliases() {
    assert_eq!(
        "strokes".parse::<NumericField>().unwrap(),
        NumericField::RowPerMinute
    );
    assert_eq!("rpm".parse::<NumericField>().unwrap(), NumericField::RowPerMinute);
    assert_eq!("HR".parse::<NumericField>().unwrap(), NumericField::Pulse);
    assert_eq!(NumericField::Weight.to_string(), "weight");
}

#[test]
fn test_outcome_serializes_with_tag() {
    let json = serde_json::to_value(check_range(NumericField::Reps, "150")).unwrap();
    assert_eq!(json["outcome"], "notify_clamped");
    assert_eq!(json["value"], "99");
    assert_eq!(json["notice"]["attempted"], "150");
}
