//! The canonical weekly time grid.
//!
//! Seven weekdays by 64 fifteen-minute slots covering 06:00 (inclusive) to
//! 22:00 (exclusive). The ordered slot sequence is the coordinate system the
//! rest of the crate works in: schedules, free runs and conflict windows all
//! reference slots by their canonical "HH:MM" label, and the scans map labels
//! to positions through [`slot_index`]. Changing the window constants changes
//! the grid but none of the algorithms.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GapError;

/// Minutes covered by one slot.
pub const SLOT_MINUTES: u32 = 15;

/// Opening of the daily window, minutes after midnight (06:00, inclusive).
const OPEN_MINUTES: u32 = 6 * 60;

/// Close of the daily window, minutes after midnight (22:00, exclusive).
const CLOSE_MINUTES: u32 = 22 * 60;

/// Length of one day's canonical slot sequence.
pub const SLOTS_PER_DAY: usize = ((CLOSE_MINUTES - OPEN_MINUTES) / SLOT_MINUTES) as usize;

/// One of the seven fixed weekday labels.
///
/// The declaration order is the canonical Monday-first order; `Ord` follows
/// it, so `BTreeMap<Weekday, _>` iterates days the way they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven weekdays in canonical order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The full English name, which is also the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = GapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| GapError::InvalidWeekday(s.to_string()))
    }
}

/// A 15-minute slot label, identified by its start time of day.
///
/// Parses and prints as "HH:MM". Construction only checks clock validity;
/// whether the label lies on the canonical grid is a separate question
/// answered by [`slot_index`]. Keeping the two apart lets a schedule loaded
/// from an external store carry a stale label long enough for the engine to
/// reject it explicitly instead of silently dropping busy time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(NaiveTime);

impl Slot {
    /// Builds a slot from hour and minute; `None` for invalid clock values.
    pub fn new(hour: u32, minute: u32) -> Option<Slot> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Slot)
    }

    /// Minutes after midnight of the slot's start.
    pub(crate) fn minutes_from_midnight(self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for Slot {
    type Err = GapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Slot)
            .map_err(|_| GapError::InvalidSlotLabel(s.to_string()))
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// The seven weekdays in canonical order, Monday first. The iteration and
/// display order everywhere.
pub fn weekdays() -> [Weekday; 7] {
    Weekday::ALL
}

/// The canonical ordered slot sequence for one day: "06:00" … "21:45".
///
/// Deterministic and total — every label exactly once, ascending, the last
/// slot's *end* equal to the window close.
pub fn time_slots() -> Vec<Slot> {
    (OPEN_MINUTES..CLOSE_MINUTES)
        .step_by(SLOT_MINUTES as usize)
        .filter_map(slot_from_minutes)
        .collect()
}

/// Position of `slot` in the canonical sequence, or `None` for off-grid
/// labels (outside the daily window, or not on a 15-minute boundary).
pub fn slot_index(slot: Slot) -> Option<usize> {
    let minutes = slot.minutes_from_midnight();
    if !(OPEN_MINUTES..CLOSE_MINUTES).contains(&minutes) {
        return None;
    }
    let offset = minutes - OPEN_MINUTES;
    if offset % SLOT_MINUTES != 0 {
        return None;
    }
    Some((offset / SLOT_MINUTES) as usize)
}

/// The slot at `index` of the canonical sequence; inverse of [`slot_index`].
pub fn slot_at(index: usize) -> Option<Slot> {
    if index >= SLOTS_PER_DAY {
        return None;
    }
    slot_from_minutes(OPEN_MINUTES + index as u32 * SLOT_MINUTES)
}

fn slot_from_minutes(minutes: u32) -> Option<Slot> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).map(Slot)
}
