//! Weekly opening hours
//!
//! Weekday index follows the calendar convention 0=Sunday .. 6=Saturday.
//! Times are zero-padded 24-hour `"HH:MM"` strings and compare
//! lexicographically, so a day cannot close after local midnight.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Number of days in a [`WeeklySchedule`]
pub const DAYS_PER_WEEK: usize = 7;

/// Wall-clock time of day in `"HH:MM"` form (validated)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(String);

impl TimeOfDay {
    /// Parse a zero-padded 24-hour `"HH:MM"` string
    pub fn parse(value: &str) -> ConfigResult<Self> {
        // Lexicographic ordering only holds for zero-padded values
        if value.len() != 5 {
            return Err(ConfigError::validation(format!(
                "Invalid time '{value}', expected zero-padded HH:MM"
            )));
        }
        NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| {
            ConfigError::validation(format!("Invalid time '{value}': {e}"))
        })?;

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.0
    }
}

/// Opening window for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl DayHours {
    /// Build a window from `"HH:MM"` strings; `close` must be after `open`
    pub fn new(open: &str, close: &str) -> ConfigResult<Self> {
        let hours = Self {
            open: TimeOfDay::parse(open)?,
            close: TimeOfDay::parse(close)?,
        };
        hours.check_order()?;
        Ok(hours)
    }

    /// `open <= time < close`, compared as strings
    pub fn contains(&self, time: &str) -> bool {
        self.open.as_str() <= time && time < self.close.as_str()
    }

    fn check_order(&self) -> ConfigResult<()> {
        if self.close <= self.open {
            return Err(ConfigError::validation(format!(
                "Closing time {} must be after opening time {} (overnight hours are not supported)",
                self.close, self.open
            )));
        }
        Ok(())
    }
}

/// Weekday index → optional opening window (absent = closed all day)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<u8, DayHours>",
    into = "BTreeMap<u8, DayHours>"
)]
pub struct WeeklySchedule {
    days: [Option<DayHours>; DAYS_PER_WEEK],
}

impl WeeklySchedule {
    /// Schedule with every day closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(weekday, hours)` pairs
    pub fn from_days(days: impl IntoIterator<Item = (u8, DayHours)>) -> ConfigResult<Self> {
        let mut schedule = Self::new();
        for (weekday, hours) in days {
            schedule.set(weekday, hours)?;
        }
        Ok(schedule)
    }

    /// Set the window for one weekday (0=Sunday .. 6=Saturday)
    pub fn set(&mut self, weekday: u8, hours: DayHours) -> ConfigResult<()> {
        let slot = self.days.get_mut(usize::from(weekday)).ok_or_else(|| {
            ConfigError::validation(format!(
                "Invalid weekday index {weekday}, expected 0 (Sunday) to 6 (Saturday)"
            ))
        })?;
        hours.check_order()?;
        *slot = Some(hours);
        Ok(())
    }

    /// Opening window for a weekday, `None` when closed or out of range
    pub fn get(&self, weekday: u32) -> Option<&DayHours> {
        usize::try_from(weekday)
            .ok()
            .and_then(|i| self.days.get(i))
            .and_then(Option::as_ref)
    }

    /// Iterate open days as `(weekday, hours)`
    pub fn iter(&self) -> impl Iterator<Item = (u8, &DayHours)> {
        self.days
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.as_ref().map(|h| (i as u8, h)))
    }

    /// Whether the business never opens
    pub fn is_always_closed(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }
}

impl TryFrom<BTreeMap<u8, DayHours>> for WeeklySchedule {
    type Error = ConfigError;

    fn try_from(value: BTreeMap<u8, DayHours>) -> Result<Self, Self::Error> {
        Self::from_days(value)
    }
}

impl From<WeeklySchedule> for BTreeMap<u8, DayHours> {
    fn from(value: WeeklySchedule) -> Self {
        value
            .days
            .into_iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|h| (i as u8, h)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_parse() {
        assert_eq!(TimeOfDay::parse("09:05").unwrap().as_str(), "09:05");
        assert_eq!(TimeOfDay::parse("23:59").unwrap().as_str(), "23:59");
        assert!(TimeOfDay::parse("9:05").is_err());
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
        assert!(TimeOfDay::parse("12-30").is_err());
        assert!(TimeOfDay::parse("").is_err());
        assert!(TimeOfDay::parse(" 9:05").is_err());
        assert!(TimeOfDay::parse("1:234").is_err());
    }

    #[test]
    fn test_day_hours_rejects_overnight() {
        assert!(DayHours::new("11:00", "00:30").is_err());
        assert!(DayHours::new("11:00", "11:00").is_err());
        assert!(DayHours::new("11:00", "23:30").is_ok());
    }

    #[test]
    fn test_day_hours_contains_boundaries() {
        let hours = DayHours::new("11:00", "23:30").unwrap();
        assert!(hours.contains("11:00"));
        assert!(hours.contains("23:29"));
        assert!(!hours.contains("23:30"));
        assert!(!hours.contains("10:59"));
    }

    #[test]
    fn test_set_rejects_out_of_range_weekday() {
        let mut schedule = WeeklySchedule::new();
        let err = schedule
            .set(7, DayHours::new("11:00", "22:00").unwrap())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(schedule.is_always_closed());
    }

    #[test]
    fn test_get_and_iter() {
        let schedule = WeeklySchedule::from_days([
            (1, DayHours::new("11:00", "23:30").unwrap()),
            (5, DayHours::new("18:00", "23:59").unwrap()),
        ])
        .unwrap();

        assert_eq!(schedule.get(1).unwrap().open.as_str(), "11:00");
        assert!(schedule.get(0).is_none());
        assert!(schedule.get(42).is_none());
        let days: Vec<u8> = schedule.iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec![1, 5]);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let json = r#"{
            "0": { "open": "12:00", "close": "22:00" },
            "6": { "open": "11:00", "close": "23:30" }
        }"#;
        let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.get(0).unwrap().close.as_str(), "22:00");
        assert!(schedule.get(3).is_none());
        assert_eq!(schedule.get(6).unwrap().open.as_str(), "11:00");
    }

    #[test]
    fn test_deserialize_rejects_bad_entries() {
        let bad_key = r#"{ "7": { "open": "12:00", "close": "22:00" } }"#;
        assert!(serde_json::from_str::<WeeklySchedule>(bad_key).is_err());

        let bad_time = r#"{ "1": { "open": "noon", "close": "22:00" } }"#;
        assert!(serde_json::from_str::<WeeklySchedule>(bad_time).is_err());

        let overnight = r#"{ "5": { "open": "11:00", "close": "00:30" } }"#;
        assert!(serde_json::from_str::<WeeklySchedule>(overnight).is_err());
    }

    #[test]
    fn test_serialize_omits_closed_days() {
        let schedule =
            WeeklySchedule::from_days([(2, DayHours::new("10:00", "14:00").unwrap())]).unwrap();
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "2": { "open": "10:00", "close": "14:00" } })
        );
    }
}
