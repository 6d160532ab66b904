//! Wall-clock to instant conversion across DST transitions.

use std::str::FromStr;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};
use crate::template::ClockTime;

/// Policy for template times that fall in a DST gap (e.g., 02:30 during spring forward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DstPolicy {
    /// Shift to the same wall time one hour later, past the gap.
    #[default]
    ShiftForward,
    /// Drop any window whose edge does not exist that day.
    Skip,
}

impl FromStr for DstPolicy {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shift" | "shift-forward" => Ok(Self::ShiftForward),
            "skip" => Ok(Self::Skip),
            _ => Err(SlotError::InvalidDstPolicy(s.to_string())),
        }
    }
}

/// Resolve a local date and wall time in `tz` to a UTC instant.
///
/// Ambiguous times (fall back) resolve to the earlier instant.
pub fn localize(tz: &Tz, date: NaiveDate, time: NaiveTime, policy: DstPolicy) -> Option<DateTime<Utc>> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => match policy {
            DstPolicy::Skip => None,
            DstPolicy::ShiftForward => tz
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        },
    }
}

/// Resolve a `[start, end)` wall-clock window on `date` to UTC instants.
///
/// Returns `None` when either edge cannot be placed or the window collapses.
pub fn localize_window(
    tz: &Tz,
    date: NaiveDate,
    start: ClockTime,
    end: ClockTime,
    policy: DstPolicy,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = localize(tz, date, start.as_naive(), policy)?;
    let end = localize(tz, date, end.as_naive(), policy)?;
    (start < end).then_some((start, end))
}
