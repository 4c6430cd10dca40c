//! # gap-engine
//!
//! Weekly availability intersection over a fixed 15-minute slot grid.
//!
//! Users record which slots of a generic week they are busy; the engine
//! intersects any group of those schedules and reports, per weekday, the
//! maximal runs where everyone is free ([`free_runs`]). When no shared gap
//! exists it degrades gracefully: a sliding-window scan finds the fixed-size
//! windows that inconvenience the fewest people ([`min_conflict_windows`]),
//! and [`meeting_gaps`] bundles both into the report a compare view renders.
//!
//! All computation is pure: schedules in, results out. No clocks, no dates,
//! no storage. The week is generic (a "Monday" means every Monday) and the
//! grid is fixed at 06:00–22:00.
//!
//! ## Quick start
//!
//! ```rust
//! use gap_engine::{free_runs, ScheduleMap, Weekday, WeeklySchedule};
//!
//! // Alice is busy for three slots Monday morning; Bob is free all week.
//! let mut alice = WeeklySchedule::new();
//! for label in ["09:00", "09:15", "09:30"] {
//!     alice.mark_busy(Weekday::Monday, label.parse().unwrap()).unwrap();
//! }
//! let mut schedules = ScheduleMap::new();
//! schedules.insert("alice".to_string(), alice);
//! schedules.insert("bob".to_string(), WeeklySchedule::new());
//!
//! // Maximal shared free runs of at least an hour (4 slots).
//! let selected = ["alice".to_string(), "bob".to_string()];
//! let runs = free_runs(&selected, &schedules, 4).unwrap();
//!
//! // Monday splits around Alice's block; Tuesday is one solid run.
//! assert_eq!(runs[&Weekday::Monday].len(), 2);
//! assert_eq!(runs[&Weekday::Tuesday].len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`grid`] — the fixed weekday × 06:00–22:00 slot grid
//! - [`schedule`] — per-user weekly busy sets and the editing operations
//! - [`freerun`] — maximal all-free runs per weekday
//! - [`conflict`] — minimal-conflict sliding windows for blocked groups
//! - [`report`] — the combined half-hour / full-hour gap report
//! - [`roster`] — account records and engine-ready snapshots
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod freerun;
pub mod grid;
pub mod report;
pub mod roster;
pub mod schedule;

mod selection;

pub use conflict::{min_conflict_windows, ConflictScan, ConflictWindow};
pub use error::GapError;
pub use freerun::{free_runs, FreeInterval};
pub use grid::{time_slots, weekdays, Slot, Weekday};
pub use report::{meeting_gaps, GapReport};
pub use roster::{Roster, UserRecord};
pub use schedule::{ScheduleMap, WeeklySchedule};
