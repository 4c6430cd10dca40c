//! In-memory account records — the shape of the storage collaborator.
//!
//! The engine never reads a roster directly; hosts snapshot the schedules
//! out ([`Roster::snapshot`]) and hand the owned map to the scans, so a live
//! store mutated between requests can never shift a computation already
//! underway. Persistence of the roster itself is whatever the host chooses;
//! only the record shape is fixed here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GapError, Result};
use crate::schedule::{ScheduleMap, WeeklySchedule};

/// One account: the semester tag and the user's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub semester: String,
    pub schedule: WeeklySchedule,
}

/// All known accounts, keyed by user id. Ids are opaque unique strings;
/// uniqueness is enforced on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    users: BTreeMap<String, UserRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user with an empty (fully free) schedule.
    ///
    /// # Errors
    /// Returns `GapError::DuplicateUser` if the id is already taken.
    pub fn add_user(&mut self, id: &str, semester: &str) -> Result<()> {
        if self.users.contains_key(id) {
            return Err(GapError::DuplicateUser(id.to_string()));
        }
        self.users.insert(
            id.to_string(),
            UserRecord {
                semester: semester.to_string(),
                schedule: WeeklySchedule::new(),
            },
        );
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.users.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut UserRecord> {
        self.users.get_mut(id)
    }

    /// Replaces `id`'s whole week — the editor's save.
    ///
    /// # Errors
    /// Returns `GapError::UnknownUser` if no such account exists.
    pub fn replace_schedule(&mut self, id: &str, schedule: WeeklySchedule) -> Result<()> {
        match self.users.get_mut(id) {
            Some(record) => {
                record.schedule = schedule;
                Ok(())
            }
            None => Err(GapError::UnknownUser(id.to_string())),
        }
    }

    /// Every user id, sorted.
    pub fn user_ids(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Semester → sorted user ids, the grouping the compare page renders.
    pub fn users_by_semester(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (id, record) in &self.users {
            groups
                .entry(record.semester.as_str())
                .or_default()
                .push(id.as_str());
        }
        groups
    }

    /// Clones every user's schedule into an owned map for the engine — the
    /// consistent snapshot the scans assume.
    pub fn snapshot(&self) -> ScheduleMap {
        self.users
            .iter()
            .map(|(id, record)| (id.clone(), record.schedule.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
