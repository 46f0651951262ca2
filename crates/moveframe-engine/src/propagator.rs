// ABOUTME: Individual-plan propagator copying a repetition's fields to every row below it
// ABOUTME: Present fields overwrite, absent fields are left alone, row indices never change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner

use tracing::{debug, warn};

use moveframe_core::models::{IndividualPlanRow, PlanField};

/// Copy every present field of `rows[from_index]` onto the rows after it
///
/// Returns a new list; the input is untouched. Propagating from the last row
/// or from an index past the end returns an unchanged copy.
#[must_use]
pub fn copy_down(rows: &[IndividualPlanRow], from_index: usize) -> Vec<IndividualPlanRow> {
    let mut result = rows.to_vec();
    copy_down_in_place(&mut result, from_index);
    result
}

/// In-place form of [`copy_down`]
///
/// Returns the number of rows written.
pub fn copy_down_in_place(rows: &mut [IndividualPlanRow], from_index: usize) -> usize {
    let len = rows.len();
    let split = from_index
        .checked_add(1)
        .and_then(|mid| rows.split_at_mut_checked(mid));
    let Some((head, targets)) = split else {
        warn!(
            from_index,
            rows = len,
            "Propagation index past the end of the plan"
        );
        return 0;
    };
    let Some(source) = head.last() else {
        return 0;
    };

    let present: Vec<(PlanField, &str)> = PlanField::ALL
        .into_iter()
        .filter_map(|field| source.get(field).map(|value| (field, value)))
        .collect();

    for target in targets.iter_mut() {
        for (field, value) in &present {
            target.set(*field, (*value).to_owned());
        }
    }

    debug!(
        from_index,
        fields = present.len(),
        rows = targets.len(),
        "Propagated plan row"
    );
    targets.len()
}
