//! Knobs shared by slot resolution and template sync.

use chrono_tz::Tz;

use crate::busy::BoundaryPolicy;
use crate::dst::DstPolicy;
use crate::error::{Result, SlotError};
use crate::slots::Locale;

/// Length of one bookable slot, and the shortest free window worth keeping.
pub const DEFAULT_SLOT_MINUTES: i64 = 60;

/// Longest accepted slot: one full day.
pub const MAX_SLOT_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverOptions {
    /// The mentor's calendar timezone. Template clock times and slot labels
    /// are interpreted in this zone.
    pub timezone: Tz,
    pub locale: Locale,
    pub boundary: BoundaryPolicy,
    pub dst: DstPolicy,
    slot_minutes: i64,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            locale: Locale::default(),
            boundary: BoundaryPolicy::default(),
            dst: DstPolicy::default(),
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

impl ResolverOptions {
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Set the timezone from an IANA name such as `"Asia/Tokyo"`.
    pub fn with_timezone_name(self, name: &str) -> Result<Self> {
        let tz: Tz = name
            .parse()
            .map_err(|_| SlotError::InvalidTimezone(name.to_string()))?;
        Ok(self.with_timezone(tz))
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_dst(mut self, dst: DstPolicy) -> Self {
        self.dst = dst;
        self
    }

    /// Set the slot length, which must lie in `1..=MAX_SLOT_MINUTES`.
    pub fn with_slot_minutes(mut self, minutes: i64) -> Result<Self> {
        if !(1..=MAX_SLOT_MINUTES).contains(&minutes) {
            return Err(SlotError::InvalidSlotLength(minutes));
        }
        self.slot_minutes = minutes;
        Ok(self)
    }

    pub fn slot_minutes(&self) -> i64 {
        self.slot_minutes
    }
}
