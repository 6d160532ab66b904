//! Tests for cutting free windows into labeled slots.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use slot_engine::freewindow::FreeWindow;
use slot_engine::slots::{expand_windows_to_hourly_slots, Locale};
use slot_engine::ResolverOptions;

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, min, 0).unwrap()
}

fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> FreeWindow {
    FreeWindow {
        start,
        end,
        duration_minutes: (end - start).num_minutes(),
    }
}

fn long_ago() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn times(slots: &[slot_engine::Slot]) -> Vec<&str> {
    slots.iter().map(|s| s.time.as_str()).collect()
}

#[test]
fn three_hour_window_gives_three_slots() {
    let slots = expand_windows_to_hourly_slots(
        &[window(at(9, 0), at(12, 0))],
        long_ago(),
        &ResolverOptions::default(),
    );

    assert_eq!(times(&slots), ["09:00", "10:00", "11:00"]);
    for slot in &slots {
        assert_eq!(slot.date, NaiveDate::from_ymd_opt(2026, 3, 16).unwrap());
        assert_eq!(slot.day_of_week, "月");
        assert!(slot.available);
    }
    assert_eq!(slots[0].date_time, at(9, 0));
}

#[test]
fn trailing_partial_hour_is_not_a_slot() {
    // 09:00-12:15: the 12:00 slot would run past the window.
    let slots = expand_windows_to_hourly_slots(
        &[window(at(9, 0), at(12, 15))],
        long_ago(),
        &ResolverOptions::default(),
    );

    assert_eq!(times(&slots), ["09:00", "10:00", "11:00"]);
}

#[test]
fn slots_step_from_window_start() {
    let slots = expand_windows_to_hourly_slots(
        &[window(at(12, 45), at(18, 0))],
        long_ago(),
        &ResolverOptions::default(),
    );

    assert_eq!(times(&slots), ["12:45", "13:45", "14:45", "15:45", "16:45"]);
}

#[test]
fn slots_before_now_are_dropped() {
    let slots = expand_windows_to_hourly_slots(
        &[window(at(9, 0), at(12, 0))],
        at(10, 30),
        &ResolverOptions::default(),
    );

    assert_eq!(times(&slots), ["11:00"]);
}

#[test]
fn slot_starting_exactly_now_is_kept() {
    let slots = expand_windows_to_hourly_slots(
        &[window(at(9, 0), at(12, 0))],
        at(10, 0),
        &ResolverOptions::default(),
    );

    assert_eq!(times(&slots), ["10:00", "11:00"]);
}

#[test]
fn labels_follow_mentor_timezone() {
    // 00:00Z on the 16th is 09:00 in Tokyo.
    let options = ResolverOptions::default()
        .with_timezone_name("Asia/Tokyo")
        .unwrap();

    let slots = expand_windows_to_hourly_slots(&[window(at(0, 0), at(1, 0))], long_ago(), &options);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].time, "09:00");
    assert_eq!(slots[0].date, NaiveDate::from_ymd_opt(2026, 3, 16).unwrap());

    // 20:00Z on the 16th is already Tuesday in Tokyo.
    let late = Utc.with_ymd_and_hms(2026, 3, 16, 20, 0, 0).unwrap();
    let slots = expand_windows_to_hourly_slots(
        &[window(late, late + chrono::Duration::hours(1))],
        long_ago(),
        &options,
    );
    assert_eq!(slots[0].date, NaiveDate::from_ymd_opt(2026, 3, 17).unwrap());
    assert_eq!(slots[0].day_of_week, "火");
}

#[test]
fn english_labels() {
    let options = ResolverOptions::default().with_locale(Locale::En);

    let slots = expand_windows_to_hourly_slots(&[window(at(9, 0), at(10, 0))], long_ago(), &options);

    assert_eq!(slots[0].day_of_week, "Mon");
}

#[test]
fn locale_parses_names() {
    assert_eq!("ja".parse::<Locale>().unwrap(), Locale::Ja);
    assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
    assert!("fr".parse::<Locale>().is_err());
}

#[test]
fn slot_serializes_in_booking_api_shape() {
    let slots = expand_windows_to_hourly_slots(
        &[window(at(9, 0), at(10, 0))],
        long_ago(),
        &ResolverOptions::default(),
    );

    let value = serde_json::to_value(&slots[0]).unwrap();

    assert_eq!(value["dateTime"], "2026-03-16T09:00:00Z");
    assert_eq!(value["date"], "2026-03-16");
    assert_eq!(value["time"], "09:00");
    assert_eq!(value["dayOfWeek"], "月");
    assert_eq!(value["available"], true);
}

#[test]
fn half_hour_slots() {
    let options = ResolverOptions::default().with_slot_minutes(30).unwrap();

    let slots = expand_windows_to_hourly_slots(&[window(at(9, 0), at(10, 45))], long_ago(), &options);

    assert_eq!(times(&slots), vec!["09:00", "09:30", "10:00"]);
}

#[test]
fn slot_length_outside_one_day_is_rejected() {
    let defaults = ResolverOptions::default();

    assert!(defaults.with_slot_minutes(0).is_err());
    assert!(defaults.with_slot_minutes(-60).is_err());
    assert!(defaults.with_slot_minutes(24 * 60 + 1).is_err());
    assert!(defaults.with_slot_minutes(i64::MAX).is_err());
    assert_eq!(defaults.with_slot_minutes(24 * 60).unwrap().slot_minutes(), 24 * 60);
    assert_eq!(defaults.slot_minutes(), 60);
}
