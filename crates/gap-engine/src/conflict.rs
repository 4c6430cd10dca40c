//! Minimal-conflict window scan — the fallback when no fully free run
//! exists.
//!
//! Slides a fixed-length window across every day's slot sequence and counts,
//! per window, how many selected users are busy during at least one of its
//! slots. Every window tied for the global minimum is reported; choosing
//! among the ties is the caller's presentation concern.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{self, Slot, Weekday};
use crate::schedule::ScheduleMap;
use crate::selection::Selection;

/// A fixed-length candidate window and the number of selected users who
/// collide with it.
///
/// `end` is inclusive, like [`FreeInterval`](crate::freerun::FreeInterval).
/// A user busy for the whole window counts once, the same as a user busy for
/// a single slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWindow {
    pub day: Weekday,
    pub start: Slot,
    pub end: Slot,
    pub conflicts: usize,
}

/// The result of one window scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictScan {
    /// Every window whose conflict count equals `min_conflicts`, in
    /// day-then-position scan order.
    pub windows: Vec<ConflictWindow>,
    /// The global minimum conflict count across all scanned windows.
    pub min_conflicts: usize,
}

/// Scans every window of exactly `window_slots` contiguous slots on every
/// day and collects the windows tied for the minimum conflict count.
///
/// The window slides by one slot; the last valid start position is
/// `64 − window_slots`, so a window never crosses the day boundary. With a
/// non-empty selection at least one window fits and the scan always returns
/// at least one result — `min_conflicts` is 0 exactly when some window is
/// fully free for everyone.
///
/// Whether to run this scan at all (typically: after [`free_runs`] with the
/// same length found nothing) is the caller's policy, not this function's;
/// [`meeting_gaps`] holds the stock comparison flow.
///
/// Pure: no side effects, same output for same input.
///
/// # Errors
/// The same preconditions as [`free_runs`], with `window_slots` in place of
/// `min_run_slots`.
///
/// [`free_runs`]: crate::freerun::free_runs
/// [`meeting_gaps`]: crate::report::meeting_gaps
pub fn min_conflict_windows(
    selected: &[String],
    schedules: &ScheduleMap,
    window_slots: usize,
) -> Result<ConflictScan> {
    let selection = Selection::build(selected, schedules, window_slots)?;
    debug!(
        "min_conflict_windows: {} users, window {} slots",
        selection.user_count(),
        window_slots
    );

    let slots = grid::time_slots();
    let mut windows: Vec<ConflictWindow> = Vec::new();
    let mut min_conflicts = usize::MAX;

    for day in Weekday::ALL {
        for start in 0..=(slots.len() - window_slots) {
            let conflicts = selection
                .masks()
                .iter()
                .filter(|mask| mask.busy_within(day, start, window_slots))
                .count();

            if conflicts < min_conflicts {
                min_conflicts = conflicts;
                windows.clear();
            }
            if conflicts == min_conflicts {
                windows.push(ConflictWindow {
                    day,
                    start: slots[start],
                    end: slots[start + window_slots - 1],
                    conflicts,
                });
            }
        }
    }

    Ok(ConflictScan {
        windows,
        min_conflicts,
    })
}
