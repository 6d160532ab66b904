//! Environment-backed defaults for the `slots` CLI.
//!
//! A `.env` file in the working directory is loaded before the environment is
//! read. Command-line flags override every value here.
//!
//! - `SLOTS_TIMEZONE`: mentor calendar timezone (default `UTC`)
//! - `SLOTS_LOCALE`: weekday label language, `ja` or `en` (default `ja`)
//! - `SLOTS_HORIZON_DAYS`: days past today the booking range covers (default 14)
//! - `SLOTS_SYNC_DAYS`: days of busy time a sync consumes (default 7)
//! - `SLOTS_DAY_START` / `SLOTS_DAY_END`: synced working day (default 09:00–18:00);
//!   each edge is merged with its flag before the pair is checked
//! - `SLOTS_LOG_LEVEL`: tracing filter, falling back to `RUST_LOG`, then `warn`

use std::env;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use slot_engine::resolver::DEFAULT_HORIZON_DAYS;
use slot_engine::sync::DEFAULT_SYNC_DAYS;
use slot_engine::{ClockTime, Locale, ResolverOptions};

#[derive(Debug, Clone)]
pub struct Settings {
    pub timezone: Tz,
    pub locale: Locale,
    pub horizon_days: u32,
    pub sync_days: u32,
    pub day_start: Option<ClockTime>,
    pub day_end: Option<ClockTime>,
    pub log_level: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let var = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        let timezone = match var("SLOTS_TIMEZONE") {
            Some(name) => parse_timezone(&name).context("Invalid SLOTS_TIMEZONE value")?,
            None => Tz::UTC,
        };

        let locale = match var("SLOTS_LOCALE") {
            Some(raw) => raw.parse::<Locale>().context("Invalid SLOTS_LOCALE value")?,
            None => Locale::default(),
        };

        let horizon_days = match var("SLOTS_HORIZON_DAYS") {
            Some(raw) => raw.trim().parse::<u32>().context("Invalid SLOTS_HORIZON_DAYS value")?,
            None => DEFAULT_HORIZON_DAYS,
        };

        let sync_days = match var("SLOTS_SYNC_DAYS") {
            Some(raw) => raw.trim().parse::<u32>().context("Invalid SLOTS_SYNC_DAYS value")?,
            None => DEFAULT_SYNC_DAYS,
        };

        let day_start = var("SLOTS_DAY_START")
            .map(|raw| raw.parse::<ClockTime>())
            .transpose()
            .context("Invalid SLOTS_DAY_START value")?;
        let day_end = var("SLOTS_DAY_END")
            .map(|raw| raw.parse::<ClockTime>())
            .transpose()
            .context("Invalid SLOTS_DAY_END value")?;

        let log_level = var("SLOTS_LOG_LEVEL")
            .or_else(|| var("RUST_LOG"))
            .unwrap_or_else(|| "warn".to_string());

        Ok(Self {
            timezone,
            locale,
            horizon_days,
            sync_days,
            day_start,
            day_end,
            log_level,
        })
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    Ok(ResolverOptions::default().with_timezone_name(name.trim())?.timezone)
}
