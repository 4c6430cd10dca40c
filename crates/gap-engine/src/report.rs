//! The compare-schedules policy: which run lengths to query and when to fall
//! back to the minimal-conflict scan.
//!
//! The engine functions are duration-agnostic and must be invoked once per
//! desired duration; this module encodes the flow the presentation layer
//! runs — 30-minute and 60-minute free runs, then, only when no 30-minute
//! run exists on any day, the least-conflicted one-hour windows.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::conflict::{min_conflict_windows, ConflictScan};
use crate::error::Result;
use crate::freerun::{free_runs, FreeInterval};
use crate::grid::Weekday;
use crate::schedule::ScheduleMap;

/// Slots in a 30-minute run.
pub const HALF_HOUR_SLOTS: usize = 2;

/// Slots in a one-hour run, and in the fallback window.
pub const HOUR_SLOTS: usize = 4;

/// Everything the presentation layer needs for one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    /// Free runs of at least 30 minutes, per day.
    pub half_hour: BTreeMap<Weekday, Vec<FreeInterval>>,
    /// Free runs of at least 60 minutes, per day — the subset long enough
    /// for an hour meeting.
    pub full_hour: BTreeMap<Weekday, Vec<FreeInterval>>,
    /// Least-conflicted one-hour windows, present only when `half_hour` is
    /// empty for every day.
    pub fallback: Option<ConflictScan>,
}

impl GapReport {
    /// True when no fully free 30-minute run exists anywhere in the week.
    pub fn fully_blocked(&self) -> bool {
        self.half_hour.values().all(Vec::is_empty)
    }
}

/// Runs the comparison flow for `selected` against `schedules`.
///
/// # Errors
/// The same preconditions as [`free_runs`]; the run lengths used here always
/// fit the grid.
pub fn meeting_gaps(selected: &[String], schedules: &ScheduleMap) -> Result<GapReport> {
    let half_hour = free_runs(selected, schedules, HALF_HOUR_SLOTS)?;
    let full_hour = free_runs(selected, schedules, HOUR_SLOTS)?;

    let mut report = GapReport {
        half_hour,
        full_hour,
        fallback: None,
    };

    if report.fully_blocked() {
        debug!("meeting_gaps: no shared 30-minute run, scanning hour windows");
        report.fallback = Some(min_conflict_windows(selected, schedules, HOUR_SLOTS)?);
    }

    Ok(report)
}
