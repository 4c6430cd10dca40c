//! WASM bindings for gap-engine.
//!
//! Exposes the slot grid, the hour toggle, and both scans to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings. The engine
//! types already serialize to the wire shapes a schedule UI renders (weekday
//! names as keys, "HH:MM" slot labels), so only the grid description and the
//! toggle outcome need dedicated DTOs.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p gap-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/gap_engine_wasm.wasm
//! ```

use gap_engine::{ScheduleMap, Weekday, WeeklySchedule};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// The fixed grid, spelled out so the UI never duplicates its constants.
#[derive(Serialize)]
struct TimeGridDto {
    weekdays: Vec<String>,
    slots: Vec<String>,
}

/// Result of an hour toggle: the updated schedule plus the hour's new state.
#[derive(Serialize)]
struct ToggleOutcomeDto {
    schedule: WeeklySchedule,
    busy: bool,
}

// ---------------------------------------------------------------------------
// Helpers: parse the JSON inputs JavaScript hands us
// ---------------------------------------------------------------------------

/// Parse a `{user: {weekday: ["HH:MM", …]}}` map of stored schedules.
fn parse_schedules(json: &str) -> Result<ScheduleMap, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedules JSON: {}", e)))
}

/// Parse a JSON array of selected user ids.
fn parse_selected(json: &str) -> Result<Vec<String>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid selection JSON: {}", e)))
}

/// Parse a single `{weekday: ["HH:MM", …]}` schedule.
fn parse_schedule(json: &str) -> Result<WeeklySchedule, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))
}

fn parse_day(name: &str) -> Result<Weekday, JsValue> {
    name.parse::<Weekday>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Describe the weekly grid.
///
/// Returns a JSON string of `{weekdays, slots}`: the seven weekday names in
/// display order and the 64 "HH:MM" slot labels from "06:00" to "21:45".
#[wasm_bindgen(js_name = "timeGrid")]
pub fn time_grid() -> Result<String, JsValue> {
    let dto = TimeGridDto {
        weekdays: gap_engine::weekdays()
            .iter()
            .map(|day| day.name().to_string())
            .collect(),
        slots: gap_engine::time_slots()
            .iter()
            .map(|slot| slot.to_string())
            .collect(),
    };
    to_json(&dto)
}

/// Find, per weekday, every maximal run where all selected users are free.
///
/// `schedules_json` must be a JSON object mapping user ids to their stored
/// weekly schedules; `selected_json` a JSON array of user ids. Returns a JSON
/// string mapping weekday names to arrays of `{start, end, duration_minutes}`
/// objects, `end` inclusive.
///
/// # Arguments
/// - `schedules_json` -- `{"alice": {"Monday": ["09:00", …]}, …}`
/// - `selected_json` -- `["alice", "bob"]`
/// - `min_run_slots` -- Minimum run length in 15-minute slots (1–64)
#[wasm_bindgen(js_name = "freeRuns")]
pub fn free_runs(
    schedules_json: &str,
    selected_json: &str,
    min_run_slots: usize,
) -> Result<String, JsValue> {
    let schedules = parse_schedules(schedules_json)?;
    let selected = parse_selected(selected_json)?;

    let runs = gap_engine::free_runs(&selected, &schedules, min_run_slots)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&runs)
}

/// Scan every fixed-length window of the week and report the ones tied for
/// the fewest conflicting users.
///
/// Arguments are as in [`free_runs`], with `window_slots` in place of the
/// minimum run length. Returns a JSON string of `{windows, min_conflicts}`,
/// where each window is `{day, start, end, conflicts}` in day-then-position
/// scan order.
#[wasm_bindgen(js_name = "minConflictWindows")]
pub fn min_conflict_windows(
    schedules_json: &str,
    selected_json: &str,
    window_slots: usize,
) -> Result<String, JsValue> {
    let schedules = parse_schedules(schedules_json)?;
    let selected = parse_selected(selected_json)?;

    let scan = gap_engine::min_conflict_windows(&selected, &schedules, window_slots)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&scan)
}

/// Run the whole comparison flow: 30-minute and 60-minute free runs, plus
/// the least-conflicted hour windows when no 30-minute run exists anywhere.
///
/// Returns a JSON string of `{half_hour, full_hour, fallback}`; `fallback`
/// is `null` whenever some shared gap exists.
#[wasm_bindgen(js_name = "meetingGaps")]
pub fn meeting_gaps(schedules_json: &str, selected_json: &str) -> Result<String, JsValue> {
    let schedules = parse_schedules(schedules_json)?;
    let selected = parse_selected(selected_json)?;

    let report = gap_engine::meeting_gaps(&selected, &schedules)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&report)
}

/// Toggle a whole hour of one schedule: busy when any quarter was free,
/// free when all four were busy.
///
/// Returns a JSON string of `{schedule, busy}` with the updated schedule and
/// the hour's resulting state.
///
/// # Arguments
/// - `schedule_json` -- `{"Monday": ["09:00", …], …}`
/// - `day` -- Weekday name (e.g., "Monday")
/// - `hour` -- Hour of day, 6–21
#[wasm_bindgen(js_name = "toggleHour")]
pub fn toggle_hour(schedule_json: &str, day: &str, hour: u32) -> Result<String, JsValue> {
    let mut schedule = parse_schedule(schedule_json)?;
    let day = parse_day(day)?;

    let busy = schedule
        .toggle_hour(day, hour)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&ToggleOutcomeDto { schedule, busy })
}
