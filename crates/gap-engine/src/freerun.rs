//! Maximal free-run extraction.
//!
//! Derives the combined free/busy flag sequence for each day and scans it
//! left to right. A maximal run of consecutive free slots becomes one
//! [`FreeInterval`] when it is long enough; shorter runs are dropped whole,
//! longer runs are never truncated or split.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{self, Slot, Weekday, SLOT_MINUTES};
use crate::schedule::ScheduleMap;
use crate::selection::Selection;

/// A maximal run of consecutive slots where every selected user is free.
///
/// `end` is inclusive — the label of the run's last slot, not the wall-clock
/// instant the run finishes. The duration is the full run length × 15
/// minutes, even when the caller asked for a shorter minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeInterval {
    pub start: Slot,
    pub end: Slot,
    pub duration_minutes: u32,
}

/// Finds, per weekday, every maximal run of at least `min_run_slots`
/// consecutive slots during which all of `selected` are free.
///
/// A slot is free iff no selected user's schedule marks it busy that day; a
/// missing day key and a missing slot both mean free. Intervals within a day
/// ascend by start time (the scan is left to right), and the returned map
/// carries an entry for every weekday — an empty list when no qualifying run
/// exists — keyed in canonical Monday-first order.
///
/// Pure: no side effects, same output for same input.
///
/// # Errors
/// Returns `GapError::EmptySelection` if `selected` is empty.
/// Returns `GapError::InvalidRunLength` if `min_run_slots` is zero or exceeds
/// the 64-slot sequence.
/// Returns `GapError::UnknownUser` if a selected id has no schedule entry — a
/// missing user is never treated as free.
/// Returns `GapError::OffGridSlot` if a stored busy slot is not on the
/// canonical grid.
pub fn free_runs(
    selected: &[String],
    schedules: &ScheduleMap,
    min_run_slots: usize,
) -> Result<BTreeMap<Weekday, Vec<FreeInterval>>> {
    let selection = Selection::build(selected, schedules, min_run_slots)?;
    debug!(
        "free_runs: {} users, min run {} slots",
        selection.user_count(),
        min_run_slots
    );

    let slots = grid::time_slots();
    let mut by_day = BTreeMap::new();

    for day in Weekday::ALL {
        let flags = selection.free_flags(day);
        let mut intervals = Vec::new();

        let mut index = 0;
        while index < flags.len() {
            if !flags[index] {
                index += 1;
                continue;
            }
            // Extend to the end of the maximal free run.
            let run_start = index;
            while index < flags.len() && flags[index] {
                index += 1;
            }
            let run_len = index - run_start;
            if run_len >= min_run_slots {
                intervals.push(FreeInterval {
                    start: slots[run_start],
                    end: slots[index - 1],
                    duration_minutes: run_len as u32 * SLOT_MINUTES,
                });
            }
        }

        by_day.insert(day, intervals);
    }

    Ok(by_day)
}
