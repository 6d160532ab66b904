//! `slots` CLI — resolve a mentor's bookable slots and rebuild their weekly
//! template from calendar busy times.
//!
//! ## Usage
//!
//! ```sh
//! # Open slots for the next two weeks (today + 14 days)
//! slots resolve -t template.json -b freebusy.json
//!
//! # One specific week, bucketed by day, in the mentor's timezone
//! slots resolve -t template.json -b busy.json --from 2026-03-16 --to 2026-03-22 \
//!     --timezone Asia/Tokyo --by-day
//!
//! # Rebuild the template from a free/busy response piped on stdin
//! cat freebusy.json | slots sync --timezone Asia/Tokyo -o template.json
//!
//! # Clip overnight meetings to the window and drop windows lost to a DST gap
//! slots resolve -t template.json -b busy.json --boundary clip --dst skip
//! ```
//!
//! Templates are JSON arrays of `{"dayOfWeek", "startTime", "endTime"}`.
//! Busy input is either a bare array of `{"start", "end"}` or a provider
//! free/busy response (`{"calendars": {"primary": {"busy": [...]}}}`).

mod config;

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde_json::json;
use slot_engine::busy::{parse_busy_json, BoundaryPolicy, BusyInterval, PRIMARY_CALENDAR};
use slot_engine::{
    booking_range, derive_template, group_by_day, resolve_availability, ClockTime, DstPolicy,
    Locale, ResolverOptions, WorkingDay, WorkingHoursTemplate,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{parse_timezone, Settings};

#[derive(Parser)]
#[command(name = "slots", version, about = "Mentor booking slot resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tracing filter, e.g. "debug" or "slot_engine=trace" (overrides SLOTS_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Flags shared by both subcommands.
#[derive(clap::Args)]
struct Common {
    /// Busy intervals or free/busy response (reads from stdin if "-")
    #[arg(short, long)]
    busy: Option<String>,
    /// Calendar id to read from a free/busy response
    #[arg(long, default_value = PRIMARY_CALENDAR)]
    calendar: String,
    /// Reference instant (RFC 3339); defaults to the current time
    #[arg(long)]
    now: Option<DateTime<Utc>>,
    /// Mentor calendar timezone (IANA name)
    #[arg(long)]
    timezone: Option<String>,
    /// Busy intervals crossing a window edge: "contained" ignores them,
    /// "clip" blocks the overlapping part
    #[arg(long, default_value = "contained")]
    boundary: BoundaryPolicy,
    /// Template times inside a DST gap: "shift" moves them an hour later,
    /// "skip" drops the window for that day
    #[arg(long, default_value = "shift")]
    dst: DstPolicy,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List open hourly slots for a date range
    Resolve {
        /// Working-hours template JSON (reads from stdin if "-")
        #[arg(short, long)]
        template: String,
        /// First local date of the range (defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last local date of the range, inclusive (defaults to today + horizon)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Weekday label language: ja or en
        #[arg(long)]
        locale: Option<String>,
        /// Group slots into per-day buckets
        #[arg(long)]
        by_day: bool,
        #[command(flatten)]
        common: Common,
    },
    /// Rebuild a weekly template from busy intervals
    Sync {
        /// Number of days to derive, starting today
        #[arg(long)]
        days: Option<u32>,
        /// Start of the working day (HH:MM)
        #[arg(long)]
        day_start: Option<ClockTime>,
        /// End of the working day (HH:MM)
        #[arg(long)]
        day_end: Option<ClockTime>,
        #[command(flatten)]
        common: Common,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    init_tracing(cli.log_level.as_deref().unwrap_or(&settings.log_level));
    debug!(?settings, "loaded settings");

    match cli.command {
        Commands::Resolve {
            template,
            from,
            to,
            locale,
            by_day,
            common,
        } => {
            if template == "-" && common.busy.as_deref() == Some("-") {
                anyhow::bail!("Only one of --template and --busy may read from stdin");
            }

            let mut options = build_options(&settings, &common)?;
            if let Some(raw) = locale.as_deref() {
                options = options.with_locale(raw.parse::<Locale>().context("Invalid --locale value")?);
            }

            let template_json = read_input(Some(template.as_str()))?;
            let template = WorkingHoursTemplate::from_json(&template_json)
                .context("Failed to parse working-hours template")?;
            let busy = read_busy(common.busy.as_deref(), &common.calendar)?;
            let now = common.now.unwrap_or_else(Utc::now);

            let (default_from, default_to) = booking_range(now, &options, settings.horizon_days);
            let from = from.unwrap_or(default_from);
            let to = to.unwrap_or(default_to);

            let slots = resolve_availability(&template, &busy, from, to, now, &options);
            info!(%from, %to, windows = template.len(), busy = busy.len(), slots = slots.len(), "resolved availability");

            let body = if by_day {
                json!({ "days": group_by_day(&slots) })
            } else {
                json!({ "slots": slots })
            };
            let pretty = serde_json::to_string_pretty(&body)?;
            write_output(common.output.as_deref(), &pretty)?;
        }
        Commands::Sync {
            days,
            day_start,
            day_end,
            common,
        } => {
            let options = build_options(&settings, &common)?;
            let defaults = WorkingDay::default();
            let working_day = WorkingDay::new(
                day_start.or(settings.day_start).unwrap_or(defaults.start()),
                day_end.or(settings.day_end).unwrap_or(defaults.end()),
            )
            .context("--day-start must be before --day-end (flags override SLOTS_DAY_START/SLOTS_DAY_END)")?;
            let days = days.unwrap_or(settings.sync_days);

            // Without --busy, sync reads the provider response from stdin.
            let busy = read_busy(Some(common.busy.as_deref().unwrap_or("-")), &common.calendar)?;
            let now = common.now.unwrap_or_else(Utc::now);

            let template = derive_template(&busy, now, working_day, days, &options);
            info!(days, busy = busy.len(), windows = template.len(), "derived template");

            let pretty = serde_json::to_string_pretty(&template)?;
            write_output(common.output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_options(settings: &Settings, common: &Common) -> Result<ResolverOptions> {
    let timezone = match common.timezone.as_deref() {
        Some(name) => parse_timezone(name).context("Invalid --timezone value")?,
        None => settings.timezone,
    };
    Ok(ResolverOptions::default()
        .with_timezone(timezone)
        .with_locale(settings.locale)
        .with_boundary(common.boundary)
        .with_dst(common.dst))
}

/// Busy intervals from `path`, or none when no path was given.
fn read_busy(path: Option<&str>, calendar: &str) -> Result<Vec<BusyInterval>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = read_input(Some(path))?;
    parse_busy_json(&json, calendar).context("Failed to parse busy intervals")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
