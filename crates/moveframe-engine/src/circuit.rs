// ABOUTME: Circuit matrix generator building the circuit x series x station row table
// ABOUTME: Supports inserting circuits mid-table with contiguous relabeling and edit preservation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

//! # Circuit Matrix Generator
//!
//! Rows are emitted circuit-major, then series, then station. Circuit letters
//! are always re-derived from list position, so an insertion before `C`
//! turns the old `C` into `D` and its rows follow it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

use moveframe_core::constants::circuits::{
    MAX_CIRCUITS, MAX_INSERT_COUNT, MAX_SERIES, MAX_STATIONS, PALETTE,
};
use moveframe_core::constants::defaults;
use moveframe_core::errors::{AppError, AppResult};
use moveframe_core::models::{circuit_letter, CircuitExercise, CircuitLayout, CircuitRow};

use crate::normalizer::{normalize_common, FieldKind, NormalizeOptions};

/// What happens to entered row values when the table is rebuilt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegenerationPolicy {
    /// Carry sector, exercise, rip and pause over to the same cell of the
    /// same circuit after relabeling
    #[default]
    PreserveEdits,
    /// Rebuild every row blank
    Discard,
}

impl fmt::Display for RegenerationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreserveEdits => f.write_str("preserve"),
            Self::Discard => f.write_str("discard"),
        }
    }
}

impl FromStr for RegenerationPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" | "preserve_edits" | "keep" => Ok(Self::PreserveEdits),
            "discard" | "rebuild" => Ok(Self::Discard),
            other => Err(AppError::invalid_input(format!(
                "Unknown regeneration policy '{other}', expected preserve or discard"
            ))),
        }
    }
}

/// Where new circuits go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// After the circuit carrying this letter
    After(String),
    /// After the last circuit
    #[default]
    End,
}

impl InsertPosition {
    /// `None`, blank or `"last"` mean the end of the list
    #[must_use]
    pub fn from_letter(letter: Option<&str>) -> Self {
        match letter.map(str::trim) {
            None | Some("") => Self::End,
            Some(l) if l.eq_ignore_ascii_case("last") => Self::End,
            Some(l) => Self::After(l.to_owned()),
        }
    }

    /// Index in `exercises` the first new circuit lands at
    ///
    /// An unknown letter falls back to the end of the list.
    #[must_use]
    pub fn resolve(&self, exercises: &[CircuitExercise]) -> usize {
        match self {
            Self::End => exercises.len(),
            Self::After(letter) => exercises
                .iter()
                .position(|e| e.letter.eq_ignore_ascii_case(letter))
                .map_or_else(
                    || {
                        debug!(letter, "Insert letter not found, appending");
                        exercises.len()
                    },
                    |i| i + 1,
                ),
        }
    }
}

/// Knobs of one insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertRequest {
    /// Where to insert
    pub position: InsertPosition,
    /// Number of circuits to add
    pub count: usize,
    /// Series of each new circuit
    pub series: u32,
    /// Stations of each new circuit
    pub stations: u32,
}

/// Exercise list together with its row matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitTable {
    /// Circuits in letter order
    pub exercises: Vec<CircuitExercise>,
    /// Flattened rows
    #[serde(default)]
    pub rows: Vec<CircuitRow>,
}

/// Synthesize `count` circuits at the end of a list of `len`
#[must_use]
pub fn new_exercises(len: usize, count: usize) -> Vec<CircuitExercise> {
    (len..len + count)
        .map(|position| CircuitExercise::new(position, PALETTE[position % PALETTE.len()]))
        .collect()
}

/// Re-derive every letter from its position
pub fn relabel(exercises: &mut [CircuitExercise]) {
    for (position, exercise) in exercises.iter_mut().enumerate() {
        exercise.letter = circuit_letter(position);
    }
}

fn check_circuit_count(circuits: usize) -> AppResult<()> {
    if circuits > MAX_CIRCUITS {
        return Err(AppError::value_out_of_range(
            "circuits",
            circuits,
            0,
            MAX_CIRCUITS as u32,
        ));
    }
    Ok(())
}

fn check_layout(series: u32, stations: u32) -> AppResult<CircuitLayout> {
    if !(1..=MAX_SERIES).contains(&series) {
        return Err(AppError::value_out_of_range("series", series, 1, MAX_SERIES));
    }
    if !(1..=MAX_STATIONS).contains(&stations) {
        return Err(AppError::value_out_of_range(
            "stations", stations, 1, MAX_STATIONS,
        ));
    }
    Ok(CircuitLayout { series, stations })
}

fn push_circuit_rows(rows: &mut Vec<CircuitRow>, letter: &str, layout: CircuitLayout, pause: &str) {
    for series in 1..=layout.series {
        for station in 1..=layout.stations {
            rows.push(CircuitRow::blank(letter, series, station, pause));
        }
    }
}

/// Build the full row matrix with the same layout for every circuit
///
/// # Errors
///
/// Returns `ValueOutOfRange` if `series` or `stations` is outside `1..=99`
pub fn generate(
    exercises: &[CircuitExercise],
    series: u32,
    stations: u32,
    default_pause: &str,
) -> AppResult<Vec<CircuitRow>> {
    let layout = check_layout(series, stations)?;
    let mut rows = Vec::with_capacity(exercises.len() * layout.row_count());
    for exercise in exercises {
        push_circuit_rows(&mut rows, &exercise.letter, layout, default_pause);
    }
    debug!(
        circuits = exercises.len(),
        series,
        stations,
        rows = rows.len(),
        "Generated circuit matrix"
    );
    Ok(rows)
}

/// Series and station counts each circuit was generated with, read back
/// from its rows; `None` for circuits without rows
#[must_use]
pub fn layouts_from_rows(
    exercises: &[CircuitExercise],
    rows: &[CircuitRow],
) -> Vec<Option<CircuitLayout>> {
    exercises
        .iter()
        .map(|exercise| {
            rows.iter()
                .filter(|row| row.circuit == exercise.letter)
                .fold(None, |layout: Option<CircuitLayout>, row| {
                    let (series, stations) =
                        layout.map_or((0, 0), |l| (l.series, l.stations));
                    Some(CircuitLayout {
                        series: series.max(row.series),
                        stations: stations.max(row.station),
                    })
                })
        })
        .collect()
}

/// Insert circuits and rebuild the matrix
///
/// Existing circuits keep the layout read back from `rows`; new circuits use
/// the request's counts. When `rows` is empty only the exercise list changes.
///
/// # Errors
///
/// Returns `ValueOutOfRange` if the request's counts are out of bounds or
/// the table would exceed `MAX_CIRCUITS` circuits
pub fn insert(
    exercises: &[CircuitExercise],
    rows: &[CircuitRow],
    request: &InsertRequest,
    default_pause: &str,
    policy: RegenerationPolicy,
) -> AppResult<CircuitTable> {
    if request.count > MAX_INSERT_COUNT {
        return Err(AppError::value_out_of_range(
            "count",
            request.count,
            0,
            MAX_INSERT_COUNT as u32,
        ));
    }
    check_circuit_count(exercises.len().saturating_add(request.count))?;
    let new_layout = check_layout(request.series, request.stations)?;
    if request.count == 0 {
        return Ok(CircuitTable {
            exercises: exercises.to_vec(),
            rows: rows.to_vec(),
        });
    }

    let insert_index = request.position.resolve(exercises);
    let inserted = insert_index..insert_index + request.count;

    let mut new_list = exercises.to_vec();
    new_list.splice(
        insert_index..insert_index,
        new_exercises(exercises.len(), request.count),
    );
    relabel(&mut new_list);

    if rows.is_empty() {
        info!(
            count = request.count,
            at = insert_index,
            "Inserted circuits without a matrix"
        );
        return Ok(CircuitTable {
            exercises: new_list,
            rows: Vec::new(),
        });
    }

    let old_layouts = layouts_from_rows(exercises, rows);
    let old_cells: HashMap<(&str, u32, u32), &CircuitRow> = rows
        .iter()
        .map(|row| ((row.circuit.as_str(), row.series, row.station), row))
        .collect();

    let mut new_rows = Vec::new();
    for (position, exercise) in new_list.iter().enumerate() {
        let start = new_rows.len();
        let origin = if inserted.contains(&position) {
            None
        } else if position < insert_index {
            Some(position)
        } else {
            Some(position - request.count)
        };

        let layout = origin
            .and_then(|i| old_layouts.get(i).copied().flatten())
            .unwrap_or(new_layout);
        push_circuit_rows(&mut new_rows, &exercise.letter, layout, default_pause);

        let Some(old) = origin.and_then(|i| exercises.get(i)) else {
            continue;
        };
        if policy == RegenerationPolicy::PreserveEdits {
            for row in &mut new_rows[start..] {
                if let Some(previous) = old_cells.get(&(old.letter.as_str(), row.series, row.station))
                {
                    row.take_edits_from(previous);
                }
            }
        }
    }

    info!(
        count = request.count,
        at = insert_index,
        circuits = new_list.len(),
        rows = new_rows.len(),
        policy = %policy,
        "Inserted circuits and rebuilt matrix"
    );
    Ok(CircuitTable {
        exercises: new_list,
        rows: new_rows,
    })
}

/// Generator bound to the session's default pause and regeneration policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitMatrixGenerator {
    pause_stations: String,
    policy: RegenerationPolicy,
}

impl CircuitMatrixGenerator {
    /// Generator whose rows default to `pause_stations`
    ///
    /// The pause is normalized like any pause field; text that cannot be
    /// parsed falls back to the built-in default.
    #[must_use]
    pub fn new(pause_stations: &str) -> Self {
        Self {
            pause_stations: normalize_pause_default(pause_stations),
            policy: RegenerationPolicy::default(),
        }
    }

    /// Use `policy` when the table is rebuilt
    #[must_use]
    pub const fn with_policy(mut self, policy: RegenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Default pause for new rows
    #[must_use]
    pub fn pause_stations(&self) -> &str {
        &self.pause_stations
    }

    /// Active regeneration policy
    #[must_use]
    pub const fn policy(&self) -> RegenerationPolicy {
        self.policy
    }

    /// See [`generate`]
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for out-of-bounds counts
    pub fn generate(
        &self,
        exercises: &[CircuitExercise],
        series: u32,
        stations: u32,
    ) -> AppResult<Vec<CircuitRow>> {
        generate(exercises, series, stations, &self.pause_stations)
    }

    /// Fresh table of `circuits` circuits
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for out-of-bounds counts, including more
    /// than `MAX_CIRCUITS` circuits
    pub fn build(&self, circuits: usize, series: u32, stations: u32) -> AppResult<CircuitTable> {
        check_circuit_count(circuits)?;
        check_layout(series, stations)?;
        let exercises = new_exercises(0, circuits);
        let rows = self.generate(&exercises, series, stations)?;
        Ok(CircuitTable { exercises, rows })
    }

    /// See [`insert`]
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for out-of-bounds counts
    pub fn insert(&self, table: &CircuitTable, request: &InsertRequest) -> AppResult<CircuitTable> {
        insert(
            &table.exercises,
            &table.rows,
            request,
            &self.pause_stations,
            self.policy,
        )
    }
}

impl Default for CircuitMatrixGenerator {
    fn default() -> Self {
        Self::new(defaults::PAUSE_STATIONS)
    }
}

fn normalize_pause_default(raw: &str) -> String {
    match normalize_common(FieldKind::Pause, raw, NormalizeOptions::default()) {
        Ok(outcome) if !outcome.is_rejected() => outcome.into_value(),
        _ => {
            warn!(raw, "Unparseable default pause, using built-in default");
            defaults::PAUSE_STATIONS.to_owned()
        }
    }
}
