// ABOUTME: Digit extraction and slot filling for free-form temporal input
// ABOUTME: Splits separated input into groups or right-aligns bare digits into fixed slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use regex::Regex;
use std::sync::OnceLock;

use moveframe_core::constants::units::{TENTHS_PER_HOUR, TENTHS_PER_MINUTE, TENTHS_PER_SECOND};

use super::dispatch::Slots;

/// Characters that switch parsing to the separated strategy
const SEPARATORS: [char; 6] = ['.', ':', '\'', '"', 'h', 'H'];

/// Parsed slots of a temporal value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TemporalParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub tenths: u64,
}

impl TemporalParts {
    pub fn total_tenths(self) -> u64 {
        self.hours
            .saturating_mul(TENTHS_PER_HOUR)
            .saturating_add(self.minutes.saturating_mul(TENTHS_PER_MINUTE))
            .saturating_add(self.seconds.saturating_mul(TENTHS_PER_SECOND))
            .saturating_add(self.tenths)
    }

    /// Split a bound back into slots; layouts without an hour slot keep
    /// everything in minutes
    pub fn from_tenths(total: u64, slots: Slots) -> Self {
        let (hours, rest) = if slots == Slots::Duration {
            (total / TENTHS_PER_HOUR, total % TENTHS_PER_HOUR)
        } else {
            (0, total)
        };
        Self {
            hours,
            minutes: rest / TENTHS_PER_MINUTE,
            seconds: rest % TENTHS_PER_MINUTE / TENTHS_PER_SECOND,
            tenths: rest % TENTHS_PER_SECOND,
        }
    }

    /// Canonical text for `slots`
    pub fn format(self, slots: Slots) -> String {
        match slots {
            Slots::Duration => format!(
                "{}h{:02}'{:02}\"{}",
                self.hours, self.minutes, self.seconds, self.tenths
            ),
            Slots::MinSecTenths => {
                format!("{}'{:02}\"{}", self.minutes, self.seconds, self.tenths)
            }
            Slots::MinSec => format!("{}'{:02}\"", self.minutes, self.seconds),
        }
    }
}

pub(crate) fn has_separator(raw: &str) -> bool {
    raw.contains(SEPARATORS)
}

pub(crate) fn only_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn separator_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r#"\s*[.:'"hH]\s*"#).ok())
        .as_ref()
}

/// Parse input containing separators
///
/// Groups are assigned left to right; missing or empty groups read as zero.
/// Durations use an hour group when an `h` is present or four groups were
/// typed.
pub(crate) fn parse_separated(raw: &str, slots: Slots) -> Option<TemporalParts> {
    let pattern = separator_pattern()?;
    let groups: Vec<String> = pattern.split(raw).map(only_digits).collect();
    if groups.iter().all(String::is_empty) {
        return None;
    }
    let group = |i: usize| groups.get(i).map_or("", String::as_str);

    let with_hours =
        slots == Slots::Duration && (raw.contains(['h', 'H']) || groups.len() >= 4);
    let offset = usize::from(with_hours);

    let hours = if with_hours { parse_slot(group(0))? } else { 0 };
    let minutes = parse_slot(group(offset))?;
    let seconds = parse_slot(&fit_seconds(group(offset + 1)))?;
    let tenths = match slots {
        Slots::Duration | Slots::MinSecTenths => parse_slot(first_digit(group(offset + 2)))?,
        Slots::MinSec => 0,
    };

    Some(TemporalParts {
        hours,
        minutes,
        seconds,
        tenths,
    })
}

/// Fill bare digits into the layout's slots
///
/// Durations fill right to left: tenths, seconds, minutes, then the hour
/// slot takes every remaining digit. `M'SS"` does the same with minutes as
/// the open slot. Pace with tenths has a single minute digit, so the input
/// is padded to four digits and only the first four are read.
pub(crate) fn parse_digits(digits: &str, slots: Slots) -> Option<TemporalParts> {
    match slots {
        Slots::Duration => {
            let (head, [tenths, seconds, minutes]) = right_align(digits, [1, 2, 2])?;
            Some(TemporalParts {
                hours: parse_slot(head)?,
                minutes: parse_slot(minutes)?,
                seconds: parse_slot(seconds)?,
                tenths: parse_slot(tenths)?,
            })
        }
        Slots::MinSecTenths => {
            let padded = format!("{digits:0>4}");
            Some(TemporalParts {
                hours: 0,
                minutes: parse_slot(padded.get(..1)?)?,
                seconds: parse_slot(padded.get(1..3)?)?,
                tenths: parse_slot(padded.get(3..4)?)?,
            })
        }
        Slots::MinSec => {
            let (head, [seconds]) = right_align(digits, [2])?;
            Some(TemporalParts {
                hours: 0,
                minutes: parse_slot(head)?,
                seconds: parse_slot(seconds)?,
                tenths: 0,
            })
        }
    }
}

/// Cut `widths` off the right end of `digits`, rightmost slot first
fn right_align<const N: usize>(digits: &str, widths: [usize; N]) -> Option<(&str, [&str; N])> {
    let mut end = digits.len();
    let mut slots = [""; N];
    for (slot, width) in slots.iter_mut().zip(widths) {
        let start = end.saturating_sub(width);
        *slot = digits.get(start..end)?;
        end = start;
    }
    Some((digits.get(..end)?, slots))
}

fn parse_slot(text: &str) -> Option<u64> {
    if text.is_empty() {
        return Some(0);
    }
    text.parse().ok()
}

fn fit_seconds(group: &str) -> String {
    match group.len() {
        0 => "00".to_owned(),
        1 => format!("0{group}"),
        _ => group[..2].to_owned(),
    }
}

fn first_digit(group: &str) -> &str {
    group.get(..1).unwrap_or("")
}
