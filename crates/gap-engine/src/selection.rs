//! Validated selection snapshots.
//!
//! Both scans start the same way: dedup the selected ids, resolve each to a
//! schedule, refuse off-grid busy slots, and materialize each user's week as
//! fixed-size boolean slot masks indexed by canonical slot position. The
//! masks make the run-scan invariant obvious — a slot is one array cell, not
//! a set-membership probe repeated per label.

use std::collections::BTreeSet;

use crate::error::{GapError, Result};
use crate::grid::{self, Weekday, SLOTS_PER_DAY};
use crate::schedule::ScheduleMap;

/// Per-day busy flags for one selected user, indexed `[day][slot]`.
pub(crate) struct WeekMask {
    days: [[bool; SLOTS_PER_DAY]; 7],
}

impl WeekMask {
    fn busy(&self, day: Weekday, slot: usize) -> bool {
        self.days[day as usize][slot]
    }

    /// True when the user is busy during any slot of `[start, start + len)`.
    pub(crate) fn busy_within(&self, day: Weekday, start: usize, len: usize) -> bool {
        self.days[day as usize][start..start + len]
            .iter()
            .any(|&busy| busy)
    }
}

/// The validated inputs of one engine invocation.
pub(crate) struct Selection {
    masks: Vec<WeekMask>,
}

impl Selection {
    /// Checks every precondition and materializes the slot masks.
    ///
    /// Duplicate ids collapse — the selection is a set, so a user listed
    /// twice can never be counted twice. Fails fast, before any scanning, on
    /// an empty selection, a run length that does not fit the grid, a
    /// selected id missing from `schedules`, or an off-grid stored slot.
    pub(crate) fn build(
        selected: &[String],
        schedules: &ScheduleMap,
        run_slots: usize,
    ) -> Result<Selection> {
        if selected.is_empty() {
            return Err(GapError::EmptySelection);
        }
        if run_slots == 0 || run_slots > SLOTS_PER_DAY {
            return Err(GapError::InvalidRunLength {
                requested: run_slots,
                max: SLOTS_PER_DAY,
            });
        }

        // The BTreeSet fixes the id order, so which missing user gets
        // reported does not depend on caller order.
        let ids: BTreeSet<&str> = selected.iter().map(String::as_str).collect();

        let mut masks = Vec::with_capacity(ids.len());
        for id in ids {
            let schedule = schedules
                .get(id)
                .ok_or_else(|| GapError::UnknownUser(id.to_string()))?;

            let mut days = [[false; SLOTS_PER_DAY]; 7];
            for (day, slots) in schedule.day_sets() {
                for slot in slots {
                    let index = grid::slot_index(*slot).ok_or_else(|| GapError::OffGridSlot {
                        user: id.to_string(),
                        day: *day,
                        slot: *slot,
                    })?;
                    days[*day as usize][index] = true;
                }
            }
            masks.push(WeekMask { days });
        }

        Ok(Selection { masks })
    }

    /// Number of distinct selected users.
    pub(crate) fn user_count(&self) -> usize {
        self.masks.len()
    }

    pub(crate) fn masks(&self) -> &[WeekMask] {
        &self.masks
    }

    /// The combined flag sequence for `day`: a slot is free iff no selected
    /// user is busy during it.
    pub(crate) fn free_flags(&self, day: Weekday) -> [bool; SLOTS_PER_DAY] {
        let mut flags = [true; SLOTS_PER_DAY];
        for mask in &self.masks {
            for (slot, flag) in flags.iter_mut().enumerate() {
                *flag &= !mask.busy(day, slot);
            }
        }
        flags
    }
}
