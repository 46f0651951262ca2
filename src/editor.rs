// ABOUTME: Editing session for one moveframe: planning mode, individual rows and circuit table
// ABOUTME: Routes field edits through the normalizers and owns the individual-row lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

//! # Moveframe editor
//!
//! Individual plan rows exist only while the moveframe is in
//! [`PlanningMode::Individual`]. Switching back to `All`, saving or
//! cancelling drops them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use moveframe_core::config::SportFieldConfig;
use moveframe_core::errors::{AppError, AppResult};
use moveframe_core::models::{
    CircuitRow, IndividualPlanRow, PlanField, PlanningMode, SportCategory, SportType,
};
use moveframe_engine::{
    check_range, copy_down_in_place, normalize, CircuitMatrixGenerator, CircuitTable, FieldKind,
    InsertRequest, NormalizeOptions, NumericField, Outcome,
};

use crate::config::PlannerConfig;

/// How an edit to a plan field is validated
enum FieldRoute {
    Temporal(FieldKind),
    Numeric(NumericField),
    FreeText,
}

const fn route(field: PlanField) -> FieldRoute {
    match field {
        PlanField::Speed | PlanField::PausePace => FieldRoute::Temporal(FieldKind::Pace),
        PlanField::Time => FieldRoute::Temporal(FieldKind::Time),
        PlanField::Pause | PlanField::PauseMin => FieldRoute::Temporal(FieldKind::Pause),
        PlanField::Strokes => FieldRoute::Numeric(NumericField::RowPerMinute),
        PlanField::Reps => FieldRoute::Numeric(NumericField::Reps),
        PlanField::Weight => FieldRoute::Numeric(NumericField::Weight),
        PlanField::Watts | PlanField::RestType | PlanField::PauseMode | PlanField::Tools => {
            FieldRoute::FreeText
        }
    }
}

/// What a saved moveframe carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveframeSnapshot {
    /// Sport
    pub sport: SportType,
    /// Number of repetitions
    pub repetitions: usize,
    /// Mode at save time
    pub mode: PlanningMode,
    /// Individual rows, empty in `All` mode
    pub rows: Vec<IndividualPlanRow>,
    /// Circuit table
    pub circuits: CircuitTable,
}

/// Editing session for one moveframe
#[derive(Debug, Clone)]
pub struct MoveframeEditor {
    config: SportFieldConfig,
    repetitions: usize,
    mode: PlanningMode,
    rows: Vec<IndividualPlanRow>,
    default_pause: String,
    options: NormalizeOptions,
    generator: CircuitMatrixGenerator,
    circuits: CircuitTable,
}

impl MoveframeEditor {
    /// Session for the sport described by `config`
    #[must_use]
    pub fn new(config: SportFieldConfig, generator: CircuitMatrixGenerator) -> Self {
        let default_pause = config
            .pause_options_for(None)
            .first()
            .cloned()
            .unwrap_or_else(|| generator.pause_stations().to_owned());
        Self {
            config,
            repetitions: 0,
            mode: PlanningMode::All,
            rows: Vec::new(),
            default_pause,
            options: NormalizeOptions::default(),
            generator,
            circuits: CircuitTable::default(),
        }
    }

    /// Session for `sport` using the planner's catalog, pause and policy
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the catalog does not cover `sport`
    pub fn for_sport(planner: &PlannerConfig, sport: SportType) -> AppResult<Self> {
        let config = planner.sport_config(sport)?.clone();
        Ok(Self::new(config, planner.circuit_generator()))
    }

    /// Sport being edited
    #[must_use]
    pub const fn sport(&self) -> SportType {
        self.config.sport
    }

    /// Category of the sport
    #[must_use]
    pub const fn category(&self) -> SportCategory {
        self.config.category
    }

    /// Current planning mode
    #[must_use]
    pub const fn mode(&self) -> PlanningMode {
        self.mode
    }

    /// Repetition count
    #[must_use]
    pub const fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Individual rows, empty in `All` mode
    #[must_use]
    pub fn rows(&self) -> &[IndividualPlanRow] {
        &self.rows
    }

    /// Pause seeded into fresh rows
    #[must_use]
    pub fn default_pause(&self) -> &str {
        &self.default_pause
    }

    /// Circuit table
    #[must_use]
    pub const fn circuits(&self) -> &CircuitTable {
        &self.circuits
    }

    /// Interpret RUN paces per kilometer
    pub fn set_km_pace(&mut self, km_pace: bool) {
        self.options.km_pace = km_pace;
    }

    /// Treat edits as live keystrokes rather than committed values
    pub fn set_live_typing(&mut self, live_typing: bool) {
        self.options.live_typing = live_typing;
    }

    /// Change the repetition count
    ///
    /// In individual mode rows are appended blank or truncated from the end;
    /// rows that remain keep their values.
    pub fn set_repetitions(&mut self, repetitions: usize) {
        self.repetitions = repetitions;
        if self.mode == PlanningMode::Individual {
            self.resize_rows();
        }
    }

    /// Switch planning mode
    pub fn set_mode(&mut self, mode: PlanningMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        match mode {
            PlanningMode::Individual => {
                self.rows.clear();
                self.resize_rows();
                info!(
                    sport = %self.config.sport,
                    rows = self.rows.len(),
                    "Individual planning started"
                );
            }
            PlanningMode::All => {
                debug!(rows = self.rows.len(), "Individual rows discarded");
                self.rows.clear();
            }
        }
    }

    fn resize_rows(&mut self) {
        let category = self.config.category;
        if self.rows.len() > self.repetitions {
            self.rows.truncate(self.repetitions);
            return;
        }
        let start = self.rows.len();
        self.rows.extend(
            (start..self.repetitions)
                .map(|index| IndividualPlanRow::blank(index, category, &self.default_pause)),
        );
    }

    /// Validate and store an edit to one individual row
    ///
    /// The row keeps whatever the input box shows after the edit, so a
    /// rejected value stays exactly as typed.
    ///
    /// # Errors
    ///
    /// Returns an error outside individual mode, for an unknown row, or for a
    /// field the sport does not have (a pace on a tool sport)
    pub fn edit_field(&mut self, index: usize, field: PlanField, raw: &str) -> AppResult<Outcome> {
        if self.mode != PlanningMode::Individual {
            return Err(AppError::invalid_input(
                "Rows can only be edited in individual planning mode",
            ));
        }
        let outcome = match route(field) {
            FieldRoute::Temporal(kind) => normalize(&self.config, kind, raw, self.options)?,
            FieldRoute::Numeric(numeric) => check_range(numeric, raw),
            FieldRoute::FreeText => Outcome::Accepted {
                value: raw.trim().to_owned(),
            },
        };

        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| AppError::not_found(format!("Plan row {index}")))?;
        row.set(field, outcome.display_value().to_owned());
        debug!(index, field = %field, value = outcome.display_value(), "Plan row edited");
        Ok(outcome)
    }

    /// Propagate row `index` to every row below it
    ///
    /// Returns the number of rows written.
    pub fn copy_down(&mut self, index: usize) -> usize {
        copy_down_in_place(&mut self.rows, index)
    }

    /// Replace the circuit table with a fresh one
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for out-of-bounds counts
    pub fn generate_circuits(
        &mut self,
        circuits: usize,
        series: u32,
        stations: u32,
    ) -> AppResult<&CircuitTable> {
        self.circuits = self.generator.build(circuits, series, stations)?;
        Ok(&self.circuits)
    }

    /// Insert circuits into the current table
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for out-of-bounds counts
    pub fn insert_circuits(&mut self, request: &InsertRequest) -> AppResult<&CircuitTable> {
        self.circuits = self.generator.insert(&self.circuits, request)?;
        Ok(&self.circuits)
    }

    /// Mutable access to one circuit row's free-text fields; pauses go
    /// through [`Self::edit_circuit_pause`]
    pub fn circuit_row_mut(&mut self, index: usize) -> Option<&mut CircuitRow> {
        self.circuits.rows.get_mut(index)
    }

    /// Validate and store the pause of one circuit row
    ///
    /// Follows the individual-row rule: the row keeps what the input box
    /// shows, so a rejected value stays as typed.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown row
    pub fn edit_circuit_pause(&mut self, index: usize, raw: &str) -> AppResult<Outcome> {
        let outcome = normalize(&self.config, FieldKind::Pause, raw, self.options)?;
        let row = self
            .circuits
            .rows
            .get_mut(index)
            .ok_or_else(|| AppError::not_found(format!("Circuit row {index}")))?;
        row.pause = outcome.display_value().to_owned();
        debug!(index, circuit = %row.circuit, pause = %row.pause, "Circuit pause edited");
        Ok(outcome)
    }

    /// Finish editing, returning what should be persisted
    ///
    /// The session returns to `All` mode with no individual rows.
    pub fn save(&mut self) -> MoveframeSnapshot {
        let snapshot = MoveframeSnapshot {
            sport: self.config.sport,
            repetitions: self.repetitions,
            mode: self.mode,
            rows: std::mem::take(&mut self.rows),
            circuits: self.circuits.clone(),
        };
        self.mode = PlanningMode::All;
        info!(
            sport = %snapshot.sport,
            rows = snapshot.rows.len(),
            circuits = snapshot.circuits.exercises.len(),
            "Moveframe saved"
        );
        snapshot
    }

    /// Abandon editing; individual rows are dropped
    pub fn cancel(&mut self) {
        debug!(rows = self.rows.len(), "Moveframe edit cancelled");
        self.rows.clear();
        self.mode = PlanningMode::All;
    }
}
