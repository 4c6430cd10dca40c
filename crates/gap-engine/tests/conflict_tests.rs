//! Tests for the minimal-conflict window scan.

use gap_engine::grid::SLOTS_PER_DAY;
use gap_engine::{
    min_conflict_windows, GapError, ScheduleMap, Slot, Weekday, WeeklySchedule,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Window starts per day for a given window length.
const fn starts_per_day(window_slots: usize) -> usize {
    SLOTS_PER_DAY - window_slots + 1
}

fn slot(label: &str) -> Slot {
    label.parse().unwrap()
}

fn fully_busy() -> WeeklySchedule {
    let mut schedule = WeeklySchedule::new();
    for day in gap_engine::weekdays() {
        schedule.set_day(day, gap_engine::time_slots()).unwrap();
    }
    schedule
}

fn schedules(entries: &[(&str, &WeeklySchedule)]) -> ScheduleMap {
    entries
        .iter()
        .map(|(id, schedule)| (id.to_string(), (*schedule).clone()))
        .collect()
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

// ── Conflict counting ────────────────────────────────────────────────────────

#[test]
fn a_fully_blocked_pair_conflicts_everywhere() {
    let alice = fully_busy();
    let bob = fully_busy();
    let map = schedules(&[("alice", &alice), ("bob", &bob)]);

    let scan = min_conflict_windows(&ids(&["alice", "bob"]), &map, 4).unwrap();

    assert_eq!(scan.min_conflicts, 2);
    assert_eq!(
        scan.windows.len(),
        7 * starts_per_day(4),
        "every window ties when everyone always conflicts"
    );
    assert!(scan.windows.iter().all(|w| w.conflicts == 2));
}

#[test]
fn the_least_busy_user_sets_the_floor() {
    let alice = fully_busy();
    let bob = WeeklySchedule::new();
    let map = schedules(&[("alice", &alice), ("bob", &bob)]);

    let scan = min_conflict_windows(&ids(&["alice", "bob"]), &map, 4).unwrap();

    assert_eq!(scan.min_conflicts, 1, "bob never conflicts, alice always does");
    assert_eq!(scan.windows.len(), 7 * starts_per_day(4));
}

#[test]
fn a_user_counts_once_no_matter_how_much_overlaps() {
    // Alice is busy for every slot of every window; Bob for exactly one slot
    // of every window (every fourth slot). Both count as one conflict each.
    let alice = fully_busy();
    let mut bob = WeeklySchedule::new();
    for day in gap_engine::weekdays() {
        bob.set_day(day, gap_engine::time_slots().into_iter().step_by(4))
            .unwrap();
    }
    let map = schedules(&[("alice", &alice), ("bob", &bob)]);

    let scan = min_conflict_windows(&ids(&["alice", "bob"]), &map, 4).unwrap();

    assert_eq!(scan.min_conflicts, 2);
    assert!(scan.windows.iter().all(|w| w.conflicts == 2));
}

// ── Tie reporting ────────────────────────────────────────────────────────────

#[test]
fn every_tied_window_is_reported_in_scan_order() {
    // Two one-hour holes in an otherwise fully busy week.
    let mut alice = fully_busy();
    for label in ["10:00", "10:15", "10:30", "10:45"] {
        alice.mark_free(Weekday::Monday, slot(label)).unwrap();
    }
    for label in ["15:00", "15:15", "15:30", "15:45"] {
        alice.mark_free(Weekday::Thursday, slot(label)).unwrap();
    }
    let bob = WeeklySchedule::new();
    let map = schedules(&[("alice", &alice), ("bob", &bob)]);

    let scan = min_conflict_windows(&ids(&["alice", "bob"]), &map, 4).unwrap();

    assert_eq!(scan.min_conflicts, 0);
    assert_eq!(scan.windows.len(), 2, "both holes tie at zero conflicts");

    assert_eq!(scan.windows[0].day, Weekday::Monday);
    assert_eq!(scan.windows[0].start, slot("10:00"));
    assert_eq!(scan.windows[0].end, slot("10:45"));

    assert_eq!(scan.windows[1].day, Weekday::Thursday);
    assert_eq!(scan.windows[1].start, slot("15:00"));
    assert_eq!(scan.windows[1].end, slot("15:45"));
}

#[test]
fn windows_overlapping_a_busy_slot_drop_out_of_a_zero_tie() {
    // One busy slot at Tuesday 12:00: the four windows covering it conflict,
    // every other window of the week is clean.
    let mut alice = WeeklySchedule::new();
    alice.mark_busy(Weekday::Tuesday, slot("12:00")).unwrap();
    let map = schedules(&[("alice", &alice)]);

    let scan = min_conflict_windows(&ids(&["alice"]), &map, 4).unwrap();

    assert_eq!(scan.min_conflicts, 0);
    assert_eq!(scan.windows.len(), 6 * starts_per_day(4) + (starts_per_day(4) - 4));

    let noon = slot("12:00");
    assert!(
        scan.windows
            .iter()
            .filter(|w| w.day == Weekday::Tuesday)
            .all(|w| noon < w.start || w.end < noon),
        "no reported window may cover the busy slot"
    );
}

#[test]
fn a_day_spanning_window_leaves_one_candidate_per_day() {
    let map = schedules(&[("alice", &WeeklySchedule::new())]);

    let scan = min_conflict_windows(&ids(&["alice"]), &map, SLOTS_PER_DAY).unwrap();

    assert_eq!(scan.min_conflicts, 0);
    assert_eq!(scan.windows.len(), 7);

    let days: Vec<Weekday> = scan.windows.iter().map(|w| w.day).collect();
    assert_eq!(days, gap_engine::weekdays(), "scan order is Monday first");
    for window in &scan.windows {
        assert_eq!(window.start, slot("06:00"));
        assert_eq!(window.end, slot("21:45"));
    }
}

// ── Input validation ─────────────────────────────────────────────────────────

#[test]
fn window_length_must_fit_the_grid() {
    let map = schedules(&[("alice", &WeeklySchedule::new())]);

    assert_eq!(
        min_conflict_windows(&ids(&["alice"]), &map, SLOTS_PER_DAY + 1),
        Err(GapError::InvalidRunLength {
            requested: SLOTS_PER_DAY + 1,
            max: SLOTS_PER_DAY,
        })
    );
    assert_eq!(
        min_conflict_windows(&ids(&["alice"]), &map, 0),
        Err(GapError::InvalidRunLength {
            requested: 0,
            max: SLOTS_PER_DAY,
        })
    );
}

#[test]
fn selection_errors_match_the_free_run_scan() {
    let map = schedules(&[("alice", &WeeklySchedule::new())]);

    assert_eq!(
        min_conflict_windows(&[], &map, 4),
        Err(GapError::EmptySelection)
    );
    assert_eq!(
        min_conflict_windows(&ids(&["ghost"]), &map, 4),
        Err(GapError::UnknownUser("ghost".to_string()))
    );
}
