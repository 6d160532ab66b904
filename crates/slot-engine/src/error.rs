//! Error types for slot-engine input parsing.
//!
//! Resolution itself is total; only building the typed inputs can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid clock time '{0}': expected HH:MM")]
    InvalidClockTime(String),

    #[error("Invalid day of week {0}: expected 0 (Sunday) through 6 (Saturday)")]
    InvalidDayOfWeek(u8),

    #[error("Empty working window: start {start} is not before end {end}")]
    EmptyWindow { start: String, end: String },

    #[error("Busy interval ends before it starts: {start} > {end}")]
    InvertedInterval { start: String, end: String },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid locale '{0}': expected ja or en")]
    InvalidLocale(String),

    #[error("Invalid boundary policy '{0}': expected contained or clip")]
    InvalidBoundaryPolicy(String),

    #[error("Invalid DST policy '{0}': expected shift or skip")]
    InvalidDstPolicy(String),

    #[error("Invalid slot length {0} minutes: expected 1 through 1440")]
    InvalidSlotLength(i64),

    #[error("Calendar '{0}' not present in free/busy response")]
    UnknownCalendar(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
