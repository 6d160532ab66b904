//! Weekly working-hours template: recurring windows keyed by day of week.
//!
//! The template is owned by the mentor's profile and replaced wholesale on
//! every calendar sync. Inputs are validated when they are built or
//! deserialized, so every `WorkingWindow` in circulation has a real weekday
//! and a non-empty `[start, end)` range.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A minute-granularity wall-clock time, written as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| SlotError::InvalidClockTime(format!("{:02}:{:02}", hour, minute)))
    }

    /// Truncate a wall-clock time to whole minutes.
    pub fn from_naive(time: NaiveTime) -> Self {
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }

    pub fn as_naive(self) -> NaiveTime {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| SlotError::InvalidClockTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SlotError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Map a Sunday-based day index (0 = Sunday … 6 = Saturday) to a weekday.
pub fn weekday_from_index(day_of_week: u8) -> Result<Weekday> {
    match day_of_week {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(SlotError::InvalidDayOfWeek(other)),
    }
}

/// One recurring availability window, e.g. "Mondays 09:00–18:00".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WindowRecord", into = "WindowRecord")]
pub struct WorkingWindow {
    weekday: Weekday,
    start: ClockTime,
    end: ClockTime,
}

impl WorkingWindow {
    pub fn new(weekday: Weekday, start: ClockTime, end: ClockTime) -> Result<Self> {
        if start >= end {
            return Err(SlotError::EmptyWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            weekday,
            start,
            end,
        })
    }

    /// Build a window from its wire form (Sunday-based day index, `"HH:MM"` times).
    pub fn parse(day_of_week: u8, start: &str, end: &str) -> Result<Self> {
        Self::new(weekday_from_index(day_of_week)?, start.parse()?, end.parse()?)
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Sunday-based day index, 0 through 6.
    pub fn day_of_week(&self) -> u8 {
        self.weekday.num_days_from_sunday() as u8
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }
}

/// Wire form of [`WorkingWindow`], as stored on the mentor profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub day_of_week: u8,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl TryFrom<WindowRecord> for WorkingWindow {
    type Error = SlotError;

    fn try_from(r: WindowRecord) -> Result<Self> {
        Self::new(weekday_from_index(r.day_of_week)?, r.start_time, r.end_time)
    }
}

impl From<WorkingWindow> for WindowRecord {
    fn from(w: WorkingWindow) -> Self {
        Self {
            day_of_week: w.day_of_week(),
            start_time: w.start,
            end_time: w.end,
        }
    }
}

/// The full weekly template. Serialized as a bare JSON array of windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingHoursTemplate {
    windows: Vec<WorkingWindow>,
}

impl WorkingHoursTemplate {
    pub fn new(windows: Vec<WorkingWindow>) -> Self {
        Self { windows }
    }

    /// Parse a template from its JSON array form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn windows(&self) -> &[WorkingWindow] {
        &self.windows
    }

    /// Windows that recur on the given weekday, in template order.
    pub fn windows_on(&self, weekday: Weekday) -> impl Iterator<Item = &WorkingWindow> {
        self.windows.iter().filter(move |w| w.weekday == weekday)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl FromIterator<WorkingWindow> for WorkingHoursTemplate {
    fn from_iter<I: IntoIterator<Item = WorkingWindow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
