//! Resolve a mentor's open slots over a date range.
//!
//! For every calendar date in the range, each template window recurring on
//! that weekday is placed in the mentor's timezone, reduced by the busy
//! intervals that apply to it, and cut into slots. The aggregate is sorted
//! by instant before it is returned.
//!
//! Resolution holds no state between calls: the template and the busy list
//! are borrowed for the duration of the call and nothing is cached.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::busy::{busy_within, BusyInterval};
use crate::dst::localize_window;
use crate::freewindow::compute_daily_free_windows;
use crate::options::ResolverOptions;
use crate::slots::{expand_windows_to_hourly_slots, Slot};
use crate::template::WorkingHoursTemplate;

/// How far ahead the booking page looks, in days past today.
pub const DEFAULT_HORIZON_DAYS: u32 = 14;

/// Compute every open slot between `range_start` and `range_end` (both
/// inclusive, local dates in `options.timezone`).
///
/// Slots starting before `now` are omitted. The result is sorted by
/// `date_time` and contains no duplicate instants, even when template
/// windows overlap. An inverted range yields no slots.
pub fn resolve_availability(
    template: &WorkingHoursTemplate,
    busy: &[BusyInterval],
    range_start: NaiveDate,
    range_end: NaiveDate,
    now: DateTime<Utc>,
    options: &ResolverOptions,
) -> Vec<Slot> {
    let mut slots = Vec::new();

    for date in range_start.iter_days().take_while(|d| *d <= range_end) {
        let before = slots.len();
        for window in template.windows_on(date.weekday()) {
            let Some((day_start, day_end)) = localize_window(
                &options.timezone,
                date,
                window.start(),
                window.end(),
                options.dst,
            ) else {
                debug!(%date, start = %window.start(), end = %window.end(), "window does not exist locally, skipped");
                continue;
            };

            let day_busy = busy_within(busy, day_start, day_end, options.boundary);
            let free = compute_daily_free_windows(day_start, day_end, &day_busy, options.slot_minutes());
            slots.extend(expand_windows_to_hourly_slots(&free, now, options));
        }
        debug!(%date, slots = slots.len() - before, "resolved day");
    }

    slots.sort_by_key(|s| s.date_time);
    slots.dedup_by_key(|s| s.date_time);
    slots
}

/// The booking page's default range: today through `horizon_days` days
/// later, as local dates in `options.timezone`.
pub fn booking_range(
    now: DateTime<Utc>,
    options: &ResolverOptions,
    horizon_days: u32,
) -> (NaiveDate, NaiveDate) {
    let today = now.with_timezone(&options.timezone).date_naive();
    let last = today
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);
    (today, last)
}

/// All slots on one local calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySlots {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub slots: Vec<Slot>,
}

/// Bucket a sorted slot list by local calendar date, preserving order.
pub fn group_by_day(slots: &[Slot]) -> Vec<DaySlots> {
    let mut days: Vec<DaySlots> = Vec::new();
    for slot in slots {
        match days.last_mut() {
            Some(day) if day.date == slot.date => day.slots.push(slot.clone()),
            _ => days.push(DaySlots {
                date: slot.date,
                day_of_week: slot.day_of_week.clone(),
                slots: vec![slot.clone()],
            }),
        }
    }
    days
}
