//! Schedule Evaluator
//!
//! Decides open/closed for a [`WeeklySchedule`] at a given instant. The
//! instant is always passed in, so callers choose the local time zone by
//! choosing `Tz` (e.g. `chrono_tz::America::Sao_Paulo`).
//!
//! Comparison is lexicographic on zero-padded `"HH:MM"` strings: a window
//! is open for `open <= now < close` within the same calendar day.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::Serialize;
use shared::WeeklySchedule;

/// Hours label for a day with no entry
pub const CLOSED_LABEL: &str = "Fechado";

/// Weekday index of `now` in its own zone (0=Sunday .. 6=Saturday)
pub fn weekday_index<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    now.weekday().num_days_from_sunday()
}

/// Local time of `now` as zero-padded `"HH:MM"`
pub fn time_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Whether the business is open at `now`
pub fn is_open<Tz: TimeZone>(schedule: &WeeklySchedule, now: &DateTime<Tz>) -> bool {
    match schedule.get(weekday_index(now)) {
        Some(hours) => hours.contains(&time_label(now)),
        None => false,
    }
}

/// `"{open} - {close}"` for today, or [`CLOSED_LABEL`]
pub fn today_hours_label<Tz: TimeZone>(schedule: &WeeklySchedule, now: &DateTime<Tz>) -> String {
    day_hours_label(schedule, weekday_index(now))
}

fn day_hours_label(schedule: &WeeklySchedule, weekday: u32) -> String {
    match schedule.get(weekday) {
        Some(hours) => format!("{} - {}", hours.open, hours.close),
        None => CLOSED_LABEL.to_string(),
    }
}

/// Day names indexed by weekday index
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

/// `(day name, hours label)` for the whole week, Sunday first
pub fn weekly_hours(schedule: &WeeklySchedule) -> Vec<(&'static str, String)> {
    WEEKDAY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, day_hours_label(schedule, i as u32)))
        .collect()
}

/// Snapshot of the evaluator output at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    pub is_open: bool,
    pub hours_label: String,
    pub weekday: u32,
    /// Local `"HH:MM"` the status was evaluated at
    pub evaluated_at: String,
}

impl StoreStatus {
    /// Badge text shown next to the store name
    pub fn badge(&self) -> &'static str {
        if self.is_open {
            "Aberto agora"
        } else {
            "Fechado agora"
        }
    }
}

/// Evaluate [`is_open`] and [`today_hours_label`] together
pub fn status_at<Tz: TimeZone>(schedule: &WeeklySchedule, now: &DateTime<Tz>) -> StoreStatus {
    StoreStatus {
        is_open: is_open(schedule, now),
        hours_label: today_hours_label(schedule, now),
        weekday: weekday_index(now),
        evaluated_at: time_label(now),
    }
}
