//! # slot-engine
//!
//! Bookable 1-on-1 slots from a mentor's weekly working hours and the busy
//! times reported by their calendar.
//!
//! Every function here is pure: inputs are borrowed, results are owned, and
//! nothing is cached between calls, so the engine can serve concurrent
//! requests without coordination. Fetching the template, querying the
//! calendar provider and persisting results belong to the caller.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use slot_engine::{resolve_availability, ResolverOptions, WorkingHoursTemplate};
//!
//! let template = WorkingHoursTemplate::from_json(
//!     r#"[{"dayOfWeek":1,"startTime":"09:00","endTime":"12:00"}]"#,
//! ).unwrap();
//! let monday = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
//! let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
//!
//! let slots = resolve_availability(&template, &[], monday, monday, now, &ResolverOptions::default());
//! let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
//! assert_eq!(times, ["09:00", "10:00", "11:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`template`] — weekly working-hours template and `"HH:MM"` clock times
//! - [`busy`] — busy intervals, boundary policy, free/busy response parsing
//! - [`freewindow`] — busy list → free windows of at least one slot
//! - [`slots`] — free windows → labeled hourly slots
//! - [`resolver`] — template + busy + date range → sorted slots
//! - [`sync`] — busy intervals → replacement weekly template
//! - [`dst`] — wall-clock placement across DST transitions
//! - [`error`] — Error types

pub mod busy;
pub mod dst;
pub mod error;
pub mod freewindow;
pub mod options;
pub mod resolver;
pub mod slots;
pub mod sync;
pub mod template;

pub use busy::{parse_busy_json, BoundaryPolicy, BusyInterval, FreeBusyResponse};
pub use dst::DstPolicy;
pub use error::SlotError;
pub use freewindow::{compute_daily_free_windows, FreeWindow};
pub use options::ResolverOptions;
pub use resolver::{booking_range, group_by_day, resolve_availability, DaySlots};
pub use slots::{expand_windows_to_hourly_slots, Locale, Slot};
pub use sync::{derive_template, sync_query_window, WorkingDay};
pub use template::{ClockTime, WorkingHoursTemplate, WorkingWindow};
