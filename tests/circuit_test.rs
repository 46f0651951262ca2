// ABOUTME: Integration tests for circuit matrix generation and mid-table insertion
// ABOUTME: Covers row ordering, contiguous relabeling, per-circuit layouts and edit policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use moveframe_planner::constants::circuits::MAX_CIRCUITS;
use moveframe_planner::engine::{
    CircuitMatrixGenerator, CircuitTable, InsertPosition, InsertRequest, RegenerationPolicy,
};
use moveframe_planner::errors::ErrorCode;

fn request(after: Option<&str>, count: usize, series: u32, stations: u32) -> InsertRequest {
    InsertRequest {
        position: InsertPosition::from_letter(after),
        count,
        series,
        stations,
    }
}

fn letters(table: &CircuitTable) -> Vec<&str> {
    table.exercises.iter().map(|e| e.letter.as_str()).collect()
}

fn rows_of<'a>(table: &'a CircuitTable, letter: &str) -> Vec<&'a str> {
    table
        .rows
        .iter()
        .filter(|row| row.circuit == letter)
        .map(|row| row.exercise.as_str())
        .collect()
}

#[test]
fn test_generate_is_circuit_major() {
    common::init_test_logging();
    let table = common::circuit_table(2, 2, 3);

    assert_eq!(table.rows.len(), 12);
    let expected: Vec<(String, u32, u32)> = ["A", "B"]
        .into_iter()
        .flat_map(|circuit| {
            (1..=2).flat_map(move |series| {
                (1..=3).map(move |station| (circuit.to_owned(), series, station))
            })
        })
        .collect();
    assert_eq!(common::cells(&table), expected);
    assert!(table.rows.iter().all(|row| row.pause == "0'30\""));
}

#[test]
fn test_generate_uses_configured_pause() {
    let generator = CircuitMatrixGenerator::new("45");
    assert_eq!(generator.pause_stations(), "0'45\"");
    let table = generator.build(1, 1, 2).unwrap();
    assert!(table.rows.iter().all(|row| row.pause == "0'45\""));
}

#[test]
fn test_unparseable_pause_falls_back_to_default() {
    let generator = CircuitMatrixGenerator::new("soon");
    assert_eq!(generator.pause_stations(), "0'30\"");
}

#[test]
fn test_generate_rejects_out_of_range_counts() {
    let generator = CircuitMatrixGenerator::default();
    for (series, stations) in [(0, 3), (100, 3), (2, 0), (2, 100)] {
        let err = generator.build(2, series, stations).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
    assert!(generator.build(0, 2, 2).unwrap().rows.is_empty());
}

#[test]
fn test_circuit_count_is_bounded() {
    let generator = CircuitMatrixGenerator::default();

    let full = generator.build(MAX_CIRCUITS, 1, 1).unwrap();
    assert_eq!(full.exercises.last().unwrap().letter, "ZZ");

    for circuits in [MAX_CIRCUITS + 1, usize::MAX] {
        let err = generator.build(circuits, 1, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.details["field"], "circuits");
    }

    let err = generator
        .insert(&full, &request(None, 1, 1, 1))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(full.exercises.len(), MAX_CIRCUITS);
}

#[test]
fn test_insert_after_first_relabels_contiguously() {
    let generator = CircuitMatrixGenerator::default();
    let table = common::circuit_table(2, 2, 3);

    let result = generator.insert(&table, &request(Some("A"), 1, 1, 2)).unwrap();

    assert_eq!(letters(&result), vec!["A", "B", "C"]);
    assert_eq!(rows_of(&result, "B").len(), 2);
    assert_eq!(rows_of(&result, "A").len(), 6);
    assert_eq!(rows_of(&result, "C").len(), 6);
    assert_eq!(result.rows.len(), 14);
}

#[test]
fn test_insert_at_end_keeps_existing_letters() {
    let generator = CircuitMatrixGenerator::default();
    let table = common::circuit_table(2, 1, 1);

    for after in [None, Some("last"), Some("Q")] {
        let result = generator.insert(&table, &request(after, 2, 2, 2)).unwrap();
        assert_eq!(letters(&result), vec!["A", "B", "C", "D"]);
        assert_eq!(rows_of(&result, "D").len(), 4);
    }
}

#[test]
fn test_preserved_edits_follow_their_circuit() {
    let generator = CircuitMatrixGenerator::default();
    let mut table = common::circuit_table(2, 1, 2);
    for row in &mut table.rows {
        row.exercise = format!("{}-{}", row.circuit, row.station);
    }

    let result = generator.insert(&table, &request(Some("A"), 1, 1, 2)).unwrap();

    assert_eq!(rows_of(&result, "A"), vec!["A-1", "A-2"]);
    assert_eq!(rows_of(&result, "B"), vec!["", ""]);
    assert_eq!(rows_of(&result, "C"), vec!["B-1", "B-2"]);
}

#[test]
fn test_discard_policy_rebuilds_blank_rows() {
    let generator = CircuitMatrixGenerator::new("0'20\"").with_policy(RegenerationPolicy::Discard);
    let mut table = generator.build(2, 1, 2).unwrap();
    for row in &mut table.rows {
        row.exercise = "squat".into();
        row.pause = "1'00\"".into();
    }

    let result = generator.insert(&table, &request(Some("B"), 1, 1, 1)).unwrap();

    assert!(result.rows.iter().all(|row| row.exercise.is_empty()));
    assert!(result.rows.iter().all(|row| row.pause == "0'20\""));
}

#[test]
fn test_existing_circuits_keep_their_layout() {
    let generator = CircuitMatrixGenerator::default();
    let table = common::circuit_table(1, 3, 2);

    let once = generator.insert(&table, &request(None, 1, 1, 1)).unwrap();
    let twice = generator.insert(&once, &request(Some("A"), 1, 2, 2)).unwrap();

    assert_eq!(letters(&twice), vec!["A", "B", "C"]);
    assert_eq!(rows_of(&twice, "A").len(), 6);
    assert_eq!(rows_of(&twice, "B").len(), 4);
    assert_eq!(rows_of(&twice, "C").len(), 1);
}

#[test]
fn test_insert_without_matrix_only_extends_list() {
    let generator = CircuitMatrixGenerator::default();
    let table = CircuitTable::default();

    let result = generator.insert(&table, &request(None, 3, 2, 2)).unwrap();

    assert_eq!(letters(&result), vec!["A", "B", "C"]);
    assert!(result.rows.is_empty());
}

#[test]
fn test_insert_count_bounds() {
    let generator = CircuitMatrixGenerator::default();
    let table = common::circuit_table(2, 1, 1);

    let unchanged = generator.insert(&table, &request(Some("A"), 0, 1, 1)).unwrap();
    assert_eq!(unchanged, table);

    let err = generator
        .insert(&table, &request(Some("A"), 27, 1, 1))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = generator
        .insert(&table, &request(Some("A"), 1, 0, 1))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_letters_continue_past_z() {
    let generator = CircuitMatrixGenerator::default();
    let table = generator.build(26, 1, 1).unwrap();

    let result = generator.insert(&table, &request(None, 2, 1, 1)).unwrap();

    assert_eq!(result.exercises[25].letter, "Z");
    assert_eq!(result.exercises[26].letter, "AA");
    assert_eq!(result.exercises[27].letter, "AB");
    assert_eq!(rows_of(&result, "AB").len(), 1);
}

#[test]
fn test_policy_parsing() {
    assert_eq!(
        "keep".parse::<RegenerationPolicy>().unwrap(),
        RegenerationPolicy::PreserveEdits
    );
    assert_eq!(
        "Discard".parse::<RegenerationPolicy>().unwrap(),
        RegenerationPolicy::Discard
    );
    assert!("sometimes".parse::<RegenerationPolicy>().is_err());
    assert_eq!(RegenerationPolicy::default(), RegenerationPolicy::PreserveEdits);
}

#[test]
fn test_table_json_shape() {
    let table = common::circuit_table(1, 1, 1);
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["exercises"][0]["letter"], "A");
    assert_eq!(json["rows"][0]["circuit"], "A");
    assert_eq!(json["rows"][0]["series"], 1);

    let parsed: CircuitTable =
        serde_json::from_str(r#"{"exercises":[{"letter":"A"}]}"#).unwrap();
    assert!(parsed.rows.is_empty());
    assert!(parsed.exercises[0].name.is_empty());
}
