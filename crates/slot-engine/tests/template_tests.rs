//! Tests for the weekly working-hours template and its wire form.

use chrono::{NaiveTime, Weekday};
use slot_engine::template::{weekday_from_index, ClockTime, WorkingHoursTemplate, WorkingWindow};
use slot_engine::SlotError;

#[test]
fn parses_template_from_profile_json() {
    let json = r#"[
        {"dayOfWeek": 1, "startTime": "09:00", "endTime": "12:00"},
        {"dayOfWeek": 3, "startTime": "13:30", "endTime": "18:00"}
    ]"#;

    let template = WorkingHoursTemplate::from_json(json).unwrap();

    assert_eq!(template.len(), 2);
    assert_eq!(template.windows()[0].weekday(), Weekday::Mon);
    assert_eq!(template.windows()[0].start().to_string(), "09:00");
    assert_eq!(template.windows()[1].weekday(), Weekday::Wed);
    assert_eq!(template.windows()[1].start().to_string(), "13:30");
    assert_eq!(template.windows()[1].end().to_string(), "18:00");
}

#[test]
fn serializes_back_to_profile_shape() {
    let template = WorkingHoursTemplate::new(vec![WorkingWindow::parse(0, "10:00", "11:00").unwrap()]);

    let json = serde_json::to_string(&template).unwrap();

    assert_eq!(json, r#"[{"dayOfWeek":0,"startTime":"10:00","endTime":"11:00"}]"#);
}

#[test]
fn sunday_is_day_zero() {
    assert_eq!(weekday_from_index(0).unwrap(), Weekday::Sun);
    assert_eq!(weekday_from_index(6).unwrap(), Weekday::Sat);

    let window = WorkingWindow::parse(0, "09:00", "10:00").unwrap();
    assert_eq!(window.day_of_week(), 0);
    assert_eq!(window.weekday(), Weekday::Sun);
}

#[test]
fn rejects_day_of_week_out_of_range() {
    assert!(matches!(
        weekday_from_index(7),
        Err(SlotError::InvalidDayOfWeek(7))
    ));

    let err = WorkingHoursTemplate::from_json(r#"[{"dayOfWeek":7,"startTime":"09:00","endTime":"10:00"}]"#)
        .unwrap_err();
    assert!(
        err.to_string().contains("Invalid day of week"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn rejects_empty_or_inverted_window() {
    assert!(matches!(
        WorkingWindow::parse(1, "18:00", "09:00"),
        Err(SlotError::EmptyWindow { .. })
    ));
    assert!(matches!(
        WorkingWindow::parse(1, "09:00", "09:00"),
        Err(SlotError::EmptyWindow { .. })
    ));
}

#[test]
fn rejects_malformed_clock_time() {
    assert!(matches!(
        "9am".parse::<ClockTime>(),
        Err(SlotError::InvalidClockTime(_))
    ));
    assert!(matches!(
        "25:00".parse::<ClockTime>(),
        Err(SlotError::InvalidClockTime(_))
    ));
    assert!(ClockTime::new(24, 0).is_err());
}

#[test]
fn clock_time_truncates_to_minutes() {
    let t = ClockTime::from_naive(NaiveTime::from_hms_opt(12, 30, 45).unwrap());
    assert_eq!(t.to_string(), "12:30");
    assert_eq!(t, ClockTime::new(12, 30).unwrap());
}

#[test]
fn windows_on_filters_by_weekday() {
    let template: WorkingHoursTemplate = [
        WorkingWindow::parse(1, "09:00", "12:00").unwrap(),
        WorkingWindow::parse(2, "09:00", "12:00").unwrap(),
        WorkingWindow::parse(1, "14:00", "16:00").unwrap(),
    ]
    .into_iter()
    .collect();

    let mondays: Vec<_> = template.windows_on(Weekday::Mon).collect();
    assert_eq!(mondays.len(), 2);
    assert_eq!(mondays[1].start().to_string(), "14:00");
    assert_eq!(template.windows_on(Weekday::Sun).count(), 0);
}

#[test]
fn empty_array_is_empty_template() {
    let template = WorkingHoursTemplate::from_json("[]").unwrap();
    assert!(template.is_empty());
    assert_eq!(template, WorkingHoursTemplate::default());
}
