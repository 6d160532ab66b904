//! Busy intervals reported by the external calendar provider.
//!
//! Intervals are fetched fresh for every request and never stored; only the
//! results derived from them are.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Calendar id queried when the caller does not name one.
pub const PRIMARY_CALENDAR: &str = "primary";

/// A `[start, end)` period during which the mentor is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalRecord")]
pub struct BusyInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct IntervalRecord {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<IntervalRecord> for BusyInterval {
    type Error = SlotError;

    fn try_from(r: IntervalRecord) -> Result<Self> {
        Self::new(r.start, r.end)
    }
}

impl BusyInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(SlotError::InvertedInterval {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Half-open overlap: touching endpoints do not overlap.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && start < self.end
    }
}

/// How busy intervals that cross a working window's edge are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Only intervals lying entirely inside the window count. An overnight
    /// meeting that starts before the window opens blocks nothing.
    #[default]
    Contained,
    /// Any interval overlapping the window counts, clipped to the window.
    Clip,
}

impl FromStr for BoundaryPolicy {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contained" => Ok(Self::Contained),
            "clip" => Ok(Self::Clip),
            _ => Err(SlotError::InvalidBoundaryPolicy(s.to_string())),
        }
    }
}

/// Select the busy intervals that apply to `[window_start, window_end]`.
///
/// The result keeps input order; sorting is left to the free-window sweep.
pub fn busy_within(
    busy: &[BusyInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    policy: BoundaryPolicy,
) -> Vec<BusyInterval> {
    match policy {
        BoundaryPolicy::Contained => busy
            .iter()
            .filter(|b| b.start >= window_start && b.end <= window_end)
            .copied()
            .collect(),
        BoundaryPolicy::Clip => busy
            .iter()
            .filter(|b| b.overlaps(window_start, window_end))
            .map(|b| BusyInterval {
                start: b.start.max(window_start),
                end: b.end.min(window_end),
            })
            .collect(),
    }
}

/// One calendar's entry in a free/busy query response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarBusy {
    #[serde(default)]
    pub busy: Vec<BusyInterval>,
}

/// Response body of a provider free/busy query:
/// `{"calendars": {"primary": {"busy": [{"start": …, "end": …}]}}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FreeBusyResponse {
    #[serde(default)]
    pub calendars: BTreeMap<String, CalendarBusy>,
}

impl FreeBusyResponse {
    pub fn busy_for(&self, calendar_id: &str) -> Result<&[BusyInterval]> {
        self.calendars
            .get(calendar_id)
            .map(|c| c.busy.as_slice())
            .ok_or_else(|| SlotError::UnknownCalendar(calendar_id.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BusyPayload {
    List(Vec<BusyInterval>),
    Response(FreeBusyResponse),
}

/// Parse busy intervals from either a bare JSON array or a full free/busy
/// response, taking `calendar_id`'s entry from the latter.
pub fn parse_busy_json(json: &str, calendar_id: &str) -> Result<Vec<BusyInterval>> {
    match serde_json::from_str::<BusyPayload>(json)? {
        BusyPayload::List(list) => Ok(list),
        BusyPayload::Response(response) => Ok(response.busy_for(calendar_id)?.to_vec()),
    }
}
