//! Expand free windows into bookable hourly slots.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::freewindow::FreeWindow;
use crate::options::ResolverOptions;

/// Language of the weekday label attached to each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn weekday_label(self, weekday: Weekday) -> &'static str {
        const JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];
        const EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        let idx = weekday.num_days_from_sunday() as usize;
        match self {
            Locale::Ja => JA[idx],
            Locale::En => EN[idx],
        }
    }
}

impl FromStr for Locale {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            _ => Err(SlotError::InvalidLocale(s.to_string())),
        }
    }
}

/// One bookable slot, as handed to the booking UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub date_time: DateTime<Utc>,
    /// Local calendar date in the mentor's timezone.
    pub date: NaiveDate,
    /// Local clock time, `"HH:MM"`.
    pub time: String,
    pub day_of_week: String,
    pub available: bool,
}

impl Slot {
    pub(crate) fn at(date_time: DateTime<Utc>, tz: &Tz, locale: Locale) -> Self {
        let local = date_time.with_timezone(tz);
        Self {
            date_time,
            date: local.date_naive(),
            time: local.format("%H:%M").to_string(),
            day_of_week: locale.weekday_label(local.weekday()).to_string(),
            available: true,
        }
    }
}

/// Cut each free window into back-to-back slots starting at the window's
/// start, dropping the trailing partial slot and any slot that begins
/// before `now`.
pub fn expand_windows_to_hourly_slots(
    windows: &[FreeWindow],
    now: DateTime<Utc>,
    options: &ResolverOptions,
) -> Vec<Slot> {
    let step = Duration::minutes(options.slot_minutes());

    let mut slots = Vec::new();
    for window in windows {
        let mut cursor = window.start;
        while cursor + step <= window.end {
            if cursor >= now {
                slots.push(Slot::at(cursor, &options.timezone, options.locale));
            }
            cursor += step;
        }
    }
    slots
}
