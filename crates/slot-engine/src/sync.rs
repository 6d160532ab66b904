//! Rebuild a mentor's weekly template from their calendar's busy times.
//!
//! Each of the next `days` local dates gets a fixed working day (09:00–18:00
//! by default); the free windows left after subtracting that day's busy
//! intervals become the new template entries. The old template is discarded,
//! never merged.

use chrono::{DateTime, Datelike, Days, Duration, NaiveTime, Utc};
use tracing::debug;

use crate::busy::{busy_within, BusyInterval};
use crate::dst::localize_window;
use crate::error::{Result, SlotError};
use crate::freewindow::compute_daily_free_windows;
use crate::options::ResolverOptions;
use crate::template::{ClockTime, WorkingHoursTemplate, WorkingWindow};

/// Number of days queried from the provider on each sync.
pub const DEFAULT_SYNC_DAYS: u32 = 7;

/// The working day assumed for every synced date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingDay {
    start: ClockTime,
    end: ClockTime,
}

impl WorkingDay {
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self> {
        if start >= end {
            return Err(SlotError::EmptyWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }
}

impl Default for WorkingDay {
    fn default() -> Self {
        let at = |hour| ClockTime::from_naive(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN));
        Self {
            start: at(9),
            end: at(18),
        }
    }
}

/// The `[time_min, time_max)` range to request busy intervals for.
pub fn sync_query_window(now: DateTime<Utc>, days: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    (now, now + Duration::days(i64::from(days)))
}

/// Derive a fresh weekly template from busy intervals covering the next
/// `days` local dates, starting with today.
///
/// Free windows shorter than `options.slot_minutes()` are dropped. Window edges
/// are truncated to whole minutes of local time.
pub fn derive_template(
    busy: &[BusyInterval],
    now: DateTime<Utc>,
    working_day: WorkingDay,
    days: u32,
    options: &ResolverOptions,
) -> WorkingHoursTemplate {
    let tz = options.timezone;
    let today = now.with_timezone(&tz).date_naive();
    let mut windows = Vec::new();

    for offset in 0..days {
        let Some(date) = today.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        let Some((day_start, day_end)) =
            localize_window(&tz, date, working_day.start, working_day.end, options.dst)
        else {
            continue;
        };

        let day_busy = busy_within(busy, day_start, day_end, options.boundary);
        let free = compute_daily_free_windows(day_start, day_end, &day_busy, options.slot_minutes());
        debug!(%date, busy = day_busy.len(), free = free.len(), "synced day");

        for window in free {
            let start = ClockTime::from_naive(window.start.with_timezone(&tz).time());
            let end = ClockTime::from_naive(window.end.with_timezone(&tz).time());
            match WorkingWindow::new(date.weekday(), start, end) {
                Ok(w) => windows.push(w),
                Err(e) => debug!(%date, error = %e, "free window dropped"),
            }
        }
    }

    WorkingHoursTemplate::new(windows)
}
