// ABOUTME: Applies a parser spec to raw input: slot fill, bound checks and overflow policy
// ABOUTME: Produces the canonical text or the matching reject, clamp or notify outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use tracing::{debug, info};

use moveframe_core::constants::temporal::{
    MAX_DURATION_HOURS, MAX_MINUTES_SLOT, MAX_SECONDS_SLOT,
};

use super::digits::{has_separator, only_digits, parse_digits, parse_separated, TemporalParts};
use super::dispatch::{OverflowPolicy, ParserSpec, Slots};
use super::outcome::{Outcome, RangeNotice};
use super::{FieldKind, NormalizeOptions};

/// Run `raw` through `spec`
pub(crate) fn apply(
    spec: &ParserSpec,
    field: FieldKind,
    raw: &str,
    options: NormalizeOptions,
) -> Outcome {
    let Some(slots) = spec.shape.slots() else {
        return apply_decimal(spec, raw);
    };

    let trimmed = raw.trim();
    let parts = if has_separator(trimmed) {
        parse_separated(trimmed, slots)
    } else {
        let digits = only_digits(trimmed);
        if digits.is_empty() {
            None
        } else if options.live_typing && field == FieldKind::Pause && digits.len() == 1 {
            // Mid-entry: keep the lone digit visible until the next keystroke
            return Outcome::accepted(format!("0'{digits}"));
        } else {
            parse_digits(&digits, slots)
        }
    };

    let Some(parts) = parts else {
        debug!(field = spec.label, raw, "Unparseable input echoed back");
        return Outcome::rejected(raw);
    };
    check_bounds(spec, slots, parts, raw)
}

fn check_bounds(
    spec: &ParserSpec,
    slots: Slots,
    mut parts: TemporalParts,
    raw: &str,
) -> Outcome {
    let total = parts.total_tenths();

    if slots == Slots::Duration && parts.hours >= MAX_DURATION_HOURS {
        if let Some(max) = spec.max.filter(|max| total > *max) {
            debug!(field = spec.label, raw, "Hour digit saturated");
            return Outcome::clamped(bound_text(slots, max));
        }
    }

    if slots == Slots::Duration && parts.minutes > MAX_MINUTES_SLOT {
        debug!(field = spec.label, raw, "Minutes slot overflow echoed back");
        return Outcome::rejected(raw);
    }

    let mut seconds_clamped = false;
    if parts.seconds > MAX_SECONDS_SLOT {
        match spec.policy {
            OverflowPolicy::ClampSeconds | OverflowPolicy::NotifyAndClamp => {
                parts.seconds = MAX_SECONDS_SLOT;
                seconds_clamped = true;
            }
            OverflowPolicy::Reject | OverflowPolicy::SnapToMin | OverflowPolicy::Saturate => {
                debug!(field = spec.label, raw, "Seconds slot overflow echoed back");
                return Outcome::rejected(raw);
            }
        }
    }

    let total = parts.total_tenths();
    if total < spec.min {
        return below_min(spec, slots, raw);
    }
    if let Some(max) = spec.max.filter(|max| total > *max) {
        return above_max(spec, slots, max, raw);
    }

    let value = parts.format(slots);
    if !seconds_clamped {
        return Outcome::accepted(value);
    }
    if spec.policy == OverflowPolicy::NotifyAndClamp {
        info!(field = spec.label, raw, value, "Seconds clamped after notice");
        return Outcome::notify_clamped(value, notice(spec, slots, raw));
    }
    debug!(field = spec.label, raw, value, "Seconds clamped to 59");
    Outcome::clamped(value)
}

fn below_min(spec: &ParserSpec, slots: Slots, raw: &str) -> Outcome {
    let value = bound_text(slots, spec.min);
    match spec.policy {
        OverflowPolicy::Reject => {
            debug!(field = spec.label, raw, "Below minimum, echoed back");
            Outcome::rejected(raw)
        }
        OverflowPolicy::SnapToMin | OverflowPolicy::Saturate | OverflowPolicy::ClampSeconds => {
            debug!(field = spec.label, raw, value, "Snapped to minimum");
            Outcome::clamped(value)
        }
        OverflowPolicy::NotifyAndClamp => {
            info!(field = spec.label, raw, value, "Below minimum, clamped after notice");
            Outcome::notify_clamped(value, notice(spec, slots, raw))
        }
    }
}

fn above_max(spec: &ParserSpec, slots: Slots, max: u64, raw: &str) -> Outcome {
    let value = bound_text(slots, max);
    match spec.policy {
        OverflowPolicy::Reject | OverflowPolicy::SnapToMin => {
            debug!(field = spec.label, raw, "Above maximum, echoed back");
            Outcome::rejected(raw)
        }
        OverflowPolicy::Saturate | OverflowPolicy::ClampSeconds => {
            debug!(field = spec.label, raw, value, "Saturated at maximum");
            Outcome::clamped(value)
        }
        OverflowPolicy::NotifyAndClamp => {
            info!(field = spec.label, raw, value, "Above maximum, clamped after notice");
            Outcome::notify_clamped(value, notice(spec, slots, raw))
        }
    }
}

fn bound_text(slots: Slots, tenths: u64) -> String {
    TemporalParts::from_tenths(tenths, slots).format(slots)
}

fn notice(spec: &ParserSpec, slots: Slots, raw: &str) -> RangeNotice {
    let max = spec
        .max
        .map_or_else(|| "no limit".to_owned(), |max| bound_text(slots, max));
    RangeNotice::new(spec.label, raw, bound_text(slots, spec.min), max)
}

fn apply_decimal(spec: &ParserSpec, raw: &str) -> Outcome {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let Ok(value) = cleaned.parse::<f64>() else {
        debug!(field = spec.label, raw, "Unparseable decimal echoed back");
        return Outcome::rejected(raw);
    };
    if !value.is_finite() {
        return Outcome::rejected(raw);
    }

    let min = spec.min as f64 / 10.0;
    if value < min {
        debug!(field = spec.label, raw, "Decimal clamped to minimum");
        return Outcome::clamped(format!("{min:.1}"));
    }
    Outcome::accepted(format!("{value:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(field: FieldKind, raw: &str) -> Outcome {
        let spec = ParserSpec::sport_independent(field).unwrap();
        apply(&spec, field, raw, NormalizeOptions::default())
    }

    #[test]
    fn test_duration_minutes_overflow_rejects() {
        assert_eq!(run(FieldKind::Time, "1750000"), Outcome::rejected("1750000"));
    }

    #[test]
    fn test_duration_seconds_overflow_rejects() {
        assert_eq!(run(FieldKind::Time, "1:75"), Outcome::rejected("1:75"));
    }

    #[test]
    fn test_duration_exactly_nine_hours_accepted() {
        assert_eq!(
            run(FieldKind::Time, "9000000"),
            Outcome::accepted("9h00'00\"0")
        );
        assert_eq!(
            run(FieldKind::Time, "9000001"),
            Outcome::clamped("9h00'00\"0")
        );
    }

    #[test]
    fn test_blank_and_letters_reject() {
        assert!(run(FieldKind::Pause, "").is_rejected());
        assert!(run(FieldKind::Pause, "abc").is_rejected());
        assert!(run(FieldKind::Time, "  ").is_rejected());
    }

    #[test]
    fn test_pause_separated_seconds_clamp() {
        assert_eq!(run(FieldKind::Pause, "2'75"), Outcome::clamped("2'59\""));
        assert_eq!(run(FieldKind::Pause, "2'45"), Outcome::accepted("2'45\""));
    }

    #[test]
    fn test_pause_live_typing_keeps_single_digit() {
        let spec = ParserSpec::sport_independent(FieldKind::Pause).unwrap();
        let live = NormalizeOptions {
            live_typing: true,
            ..NormalizeOptions::default()
        };
        assert_eq!(
            apply(&spec, FieldKind::Pause, "5", live),
            Outcome::accepted("0'5")
        );
        assert_eq!(run(FieldKind::Pause, "5"), Outcome::accepted("0'05\""));
    }

    #[test]
    fn test_reps_time_seconds_overflow_notifies() {
        let outcome = run(FieldKind::RepsTime, "175");
        assert_eq!(outcome.display_value(), "1'59\"");
        assert!(outcome.notice().is_some());
    }
}
