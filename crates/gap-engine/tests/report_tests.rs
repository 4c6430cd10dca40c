//! Tests for the compare-schedules report and its fallback policy.

use gap_engine::report::{HALF_HOUR_SLOTS, HOUR_SLOTS};
use gap_engine::{meeting_gaps, ScheduleMap, Slot, Weekday, WeeklySchedule};

// ── Helpers ──────────────────────────────────────────────────────────────────

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

// ── Report contents ──────────────────────────────────────────────────────────

#[test]
fn an_open_week_reports_runs_and_skips_the_fallback() {
    let alice = {
        let mut schedule = WeeklySchedule::new();
        schedule
            .set_day(Weekday::Monday, [slot("09:00"), slot("09:15")])
            .unwrap();
        schedule
    };
    let bob = WeeklySchedule::new();
    let map = schedules(&[("alice", &alice), ("bob", &bob)]);

    let report = meeting_gaps(&ids(&["alice", "bob"]), &map).unwrap();

    assert!(!report.fully_blocked());
    assert!(report.fallback.is_none());
    assert_eq!(report.half_hour[&Weekday::Monday].len(), 2);
    assert_eq!(report.full_hour[&Weekday::Monday].len(), 2);
    assert_eq!(report.half_hour[&Weekday::Tuesday].len(), 1);
}

#[test]
fn hour_runs_are_the_long_subset_of_half_hour_runs() {
    // A lone 30-minute hole: visible in the half-hour view, absent from the
    // hour view, and not enough to trigger the fallback.
    let mut alice = fully_busy();
    alice.mark_free(Weekday::Monday, slot("10:00")).unwrap();
    alice.mark_free(Weekday::Monday, slot("10:15")).unwrap();
    let map = schedules(&[("alice", &alice)]);

    let report = meeting_gaps(&ids(&["alice"]), &map).unwrap();

    assert_eq!(report.half_hour[&Weekday::Monday].len(), 1);
    assert_eq!(report.half_hour[&Weekday::Monday][0].start, slot("10:00"));
    assert_eq!(report.half_hour[&Weekday::Monday][0].duration_minutes, 30);
    assert!(report.full_hour[&Weekday::Monday].is_empty());
    assert!(report.fallback.is_none(), "a 30-minute gap is still a gap");
}

#[test]
fn a_fully_blocked_week_falls_back_to_hour_windows() {
    let alice = fully_busy();
    let bob = fully_busy();
    let map = schedules(&[("alice", &alice), ("bob", &bob)]);

    let report = meeting_gaps(&ids(&["alice", "bob"]), &map).unwrap();

    assert!(report.fully_blocked());
    assert!(report.half_hour.values().all(Vec::is_empty));
    assert!(report.full_hour.values().all(Vec::is_empty));

    let scan = report.fallback.as_ref().unwrap();
    assert_eq!(scan.min_conflicts, 2);
    // The fallback proposes hour-long windows.
    assert_eq!(scan.windows[0].start, slot("06:00"));
    assert_eq!(scan.windows[0].end, slot("06:45"));
}

#[test]
fn the_run_length_constants_match_the_grid() {
    assert_eq!(HALF_HOUR_SLOTS * 15, 30);
    assert_eq!(HOUR_SLOTS * 15, 60);
}

// ── Wire shape ───────────────────────────────────────────────────────────────

#[test]
fn the_report_serializes_with_day_keyed_maps() {
    let map = schedules(&[("alice", &WeeklySchedule::new())]);
    let report = meeting_gaps(&ids(&["alice"]), &map).unwrap();

    let value = serde_json::to_value(&report).unwrap();

    assert!(value["half_hour"]["Monday"].is_array());
    assert!(value["full_hour"]["Sunday"].is_array());
    assert!(value["fallback"].is_null());
    assert_eq!(value["half_hour"]["Monday"][0]["start"], "06:00");
    assert_eq!(value["half_hour"]["Monday"][0]["end"], "21:45");
    assert_eq!(value["half_hour"]["Monday"][0]["duration_minutes"], 960);
}
