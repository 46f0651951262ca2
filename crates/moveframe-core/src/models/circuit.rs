// ABOUTME: Circuit exercise and circuit row models for station-based moveframes
// ABOUTME: Letters are derived from list position and never stored independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use serde::{Deserialize, Serialize};

/// Letter label for the circuit at `position` (0 -> A, 25 -> Z, 26 -> AA)
#[must_use]
pub fn circuit_letter(position: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = position + 1;
    while remaining > 0 {
        remaining -= 1;
        letters.push(char::from(b'A' + (remaining % 26) as u8));
        remaining /= 26;
    }
    letters.iter().rev().collect()
}

/// Position of a circuit letter, inverse of [`circuit_letter`]
#[must_use]
pub fn circuit_position(letter: &str) -> Option<usize> {
    if letter.is_empty() {
        return None;
    }
    let mut value = 0usize;
    for c in letter.chars() {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return None;
        }
        value = value.checked_mul(26)?.checked_add(usize::from(c as u8 - b'A') + 1)?;
    }
    Some(value - 1)
}

/// A circuit in a station-based moveframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitExercise {
    /// Position-derived label
    pub letter: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Display color
    #[serde(default)]
    pub color: String,
}

impl CircuitExercise {
    /// Circuit at `position` with empty name
    #[must_use]
    pub fn new(position: usize, color: impl Into<String>) -> Self {
        Self {
            letter: circuit_letter(position),
            name: String::new(),
            color: color.into(),
        }
    }
}

/// Series and station counts a circuit was generated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitLayout {
    /// Number of series
    pub series: u32,
    /// Stations per series
    pub stations: u32,
}

impl CircuitLayout {
    /// Rows this layout expands to
    #[must_use]
    pub const fn row_count(self) -> usize {
        self.series as usize * self.stations as usize
    }
}

/// One (circuit, series, station) cell of the circuit table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitRow {
    /// Circuit letter
    pub circuit: String,
    /// 1-based series number
    pub series: u32,
    /// 1-based station number
    pub station: u32,
    /// Sector (muscle group or area)
    #[serde(default)]
    pub sector: String,
    /// Exercise performed at the station
    #[serde(default)]
    pub exercise: String,
    /// Repetitions
    #[serde(default)]
    pub rip: String,
    /// Rest after the station
    #[serde(default)]
    pub pause: String,
}

impl CircuitRow {
    /// Row with empty editable fields and the given default pause
    #[must_use]
    pub fn blank(circuit: &str, series: u32, station: u32, pause: &str) -> Self {
        Self {
            circuit: circuit.to_owned(),
            series,
            station,
            sector: String::new(),
            exercise: String::new(),
            rip: String::new(),
            pause: pause.to_owned(),
        }
    }

    /// Copy the user-editable fields from another row
    pub fn take_edits_from(&mut self, other: &Self) {
        self.sector.clone_from(&other.sector);
        self.exercise.clone_from(&other.exercise);
        self.rip.clone_from(&other.rip);
        self.pause.clone_from(&other.pause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_follow_position() {
        assert_eq!(circuit_letter(0), "A");
        assert_eq!(circuit_letter(2), "C");
        assert_eq!(circuit_letter(25), "Z");
        assert_eq!(circuit_letter(26), "AA");
        assert_eq!(circuit_letter(27), "AB");
        assert_eq!(circuit_letter(701), "ZZ");
        assert_eq!(circuit_letter(702), "AAA");
    }

    #[test]
    fn test_position_inverts_letter() {
        for position in [0, 1, 25, 26, 51, 700, 703] {
            assert_eq!(circuit_position(&circuit_letter(position)), Some(position));
        }
        assert_eq!(circuit_position("b"), Some(1));
        assert_eq!(circuit_position(""), None);
        assert_eq!(circuit_position("A1"), None);
    }
}
