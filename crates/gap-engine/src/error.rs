//! Error types for gap-engine operations.

use thiserror::Error;

use crate::grid::{Slot, Weekday};

/// Errors surfaced by schedule editing, roster maintenance, and the
/// intersection engine's input validation.
///
/// The scans themselves cannot fail once their inputs have been validated;
/// every variant here is deterministic and reported before any partial
/// computation happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GapError {
    /// The selected-user list was empty.
    #[error("no users selected")]
    EmptySelection,

    /// A requested run or window length does not fit the slot grid.
    #[error("run length must be between 1 and {max} slots, got {requested}")]
    InvalidRunLength { requested: usize, max: usize },

    /// A selected user id has no schedule entry.
    #[error("no schedule for user '{0}'")]
    UnknownUser(String),

    /// A busy slot in a user's stored schedule is not on the canonical grid.
    /// Rejected rather than ignored so busy time is never undercounted.
    #[error("user '{user}' has off-grid busy slot {slot} on {day}")]
    OffGridSlot {
        user: String,
        day: Weekday,
        slot: Slot,
    },

    /// A slot label could not be parsed as "HH:MM".
    #[error("invalid slot label '{0}', expected \"HH:MM\"")]
    InvalidSlotLabel(String),

    /// A weekday label is not one of the seven canonical names.
    #[error("invalid weekday '{0}'")]
    InvalidWeekday(String),

    /// A schedule edit referenced a slot outside the daily window.
    #[error("slot {0} is outside the daily window")]
    SlotOutsideWindow(Slot),

    /// An hour toggle referenced an hour not fully inside the daily window.
    #[error("hour {0:02}:00 is outside the daily window")]
    HourOutsideWindow(u32),

    /// A roster insert collided with an existing user id.
    #[error("user '{0}' already exists")]
    DuplicateUser(String),
}

/// Convenience alias used throughout gap-engine.
pub type Result<T> = std::result::Result<T, GapError>;
