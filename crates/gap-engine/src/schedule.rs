//! Per-user weekly schedules and the batch updates the form-based editor
//! performs.
//!
//! A [`WeeklySchedule`] maps each weekday to the set of busy slot labels; a
//! day without an entry is fully free. The serialized shape matches what the
//! account store persists: `{"Monday": ["06:00", "06:15"], …}`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{GapError, Result};
use crate::grid::{self, Slot, Weekday, SLOT_MINUTES};

/// The engine's input shape: user id → that user's week.
pub type ScheduleMap = BTreeMap<String, WeeklySchedule>;

/// Busy/free markings for one user's week.
///
/// Editing operations prune days whose busy set becomes empty, so a freshly
/// serialized schedule carries only days with at least one busy slot. A
/// schedule deserialized from an older store may spell free days out as
/// explicit empty lists — both forms mean the same thing.
///
/// The editing API refuses labels off the canonical grid up front; that is
/// the editor collaborator's side of the contract. Deserialization alone
/// cannot check grid membership, so the engine re-validates stored slots
/// before every scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    busy: BTreeMap<Weekday, BTreeSet<Slot>>,
}

impl WeeklySchedule {
    /// An empty, fully free week — the state a new account starts in.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no day carries any busy slot.
    pub fn is_empty(&self) -> bool {
        self.busy.values().all(BTreeSet::is_empty)
    }

    /// True when `slot` is marked busy on `day`.
    pub fn is_busy(&self, day: Weekday, slot: Slot) -> bool {
        self.busy
            .get(&day)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// The busy slots on `day`, ascending. Empty when the day is free.
    pub fn busy_slots(&self, day: Weekday) -> Vec<Slot> {
        self.busy
            .get(&day)
            .map(|slots| slots.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Marks a single slot busy.
    pub fn mark_busy(&mut self, day: Weekday, slot: Slot) -> Result<()> {
        ensure_on_grid(slot)?;
        self.busy.entry(day).or_default().insert(slot);
        Ok(())
    }

    /// Clears a single slot.
    pub fn mark_free(&mut self, day: Weekday, slot: Slot) -> Result<()> {
        ensure_on_grid(slot)?;
        if let Some(slots) = self.busy.get_mut(&day) {
            slots.remove(&slot);
            if slots.is_empty() {
                self.busy.remove(&day);
            }
        }
        Ok(())
    }

    /// Replaces the whole day with `slots` — the editor's save granularity.
    /// Any off-grid label refuses the replacement and leaves the day as it
    /// was.
    pub fn set_day<I>(&mut self, day: Weekday, slots: I) -> Result<()>
    where
        I: IntoIterator<Item = Slot>,
    {
        let mut validated = BTreeSet::new();
        for slot in slots {
            ensure_on_grid(slot)?;
            validated.insert(slot);
        }
        if validated.is_empty() {
            self.busy.remove(&day);
        } else {
            self.busy.insert(day, validated);
        }
        Ok(())
    }

    /// Erases every busy slot on `day`.
    pub fn clear_day(&mut self, day: Weekday) {
        self.busy.remove(&day);
    }

    /// The editor's bulk hour toggle: when all four quarter slots of `hour`
    /// are busy they are all cleared, otherwise all four are marked busy.
    /// Returns the resulting busy state of the hour.
    pub fn toggle_hour(&mut self, day: Weekday, hour: u32) -> Result<bool> {
        let quarters = hour_slots(hour)?;
        let all_busy = quarters.iter().all(|slot| self.is_busy(day, *slot));
        for slot in quarters {
            if all_busy {
                self.mark_free(day, slot)?;
            } else {
                self.mark_busy(day, slot)?;
            }
        }
        Ok(!all_busy)
    }

    /// The raw day → busy-set view the scans validate and index.
    pub(crate) fn day_sets(&self) -> &BTreeMap<Weekday, BTreeSet<Slot>> {
        &self.busy
    }
}

/// The quarter slots of `hour`, or an error when the hour is not fully
/// inside the daily window.
fn hour_slots(hour: u32) -> Result<Vec<Slot>> {
    let mut quarters = Vec::with_capacity((60 / SLOT_MINUTES) as usize);
    let mut minute = 0;
    while minute < 60 {
        let slot = Slot::new(hour, minute)
            .filter(|slot| grid::slot_index(*slot).is_some())
            .ok_or(GapError::HourOutsideWindow(hour))?;
        quarters.push(slot);
        minute += SLOT_MINUTES;
    }
    Ok(quarters)
}

fn ensure_on_grid(slot: Slot) -> Result<()> {
    if grid::slot_index(slot).is_none() {
        return Err(GapError::SlotOutsideWindow(slot));
    }
    Ok(())
}
