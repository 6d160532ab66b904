//! Compute free windows within one working window from a busy list.
//!
//! Sorts busy intervals by start time, walks them once with a cursor, and
//! keeps only the gaps long enough to hold a whole slot.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::busy::BusyInterval;

/// A gap in the busy list that can hold at least one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl FreeWindow {
    fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// Find the free windows of `[day_start, day_end)` that are at least
/// `min_minutes` long.
///
/// `busy` should already be restricted to this window (see
/// [`busy_within`](crate::busy::busy_within)); it may arrive in any order and
/// may overlap. Returns windows sorted by start time.
pub fn compute_daily_free_windows(
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    busy: &[BusyInterval],
    min_minutes: i64,
) -> Vec<FreeWindow> {
    if day_start >= day_end {
        return Vec::new();
    }

    // Longer than chrono can represent: no gap qualifies.
    let Some(min_gap) = Duration::try_minutes(min_minutes) else {
        return Vec::new();
    };
    let mut sorted = busy.to_vec();
    sorted.sort();

    let mut windows = Vec::new();
    let mut cursor = day_start;

    for interval in &sorted {
        if interval.start() - cursor >= min_gap && interval.start() > cursor {
            trace!(start = %cursor, end = %interval.start(), "free window");
            windows.push(FreeWindow::new(cursor, interval.start()));
        }
        // Nested intervals must not pull the cursor backwards.
        cursor = cursor.max(interval.end());
    }

    // Trailing free window after the last busy period.
    if day_end - cursor >= min_gap && day_end > cursor {
        trace!(start = %cursor, end = %day_end, "trailing free window");
        windows.push(FreeWindow::new(cursor, day_end));
    }

    windows
}
