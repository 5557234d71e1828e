//! Unit-scoped distance against the system clock.

use crate::prelude::*;

#[test]
fn hours_match_truncated_seconds() {
    let date = ago(5 * 3_600 + 1_800);
    let seconds = distance_from_now(&date);
    let hours = distance_from_now_in(&date, CalendarUnit::Hour);
    assert_eq!(hours, (seconds / 3_600.0).trunc() as i64);
    assert_eq!(hours, 5);
}

#[test]
fn future_days_are_negative() {
    let date = from_now(3 * 86_400 + 600);
    assert_eq!(distance_from_now_in(&date, CalendarUnit::Day), -3);
}

#[test]
fn exactly_one_calendar_month_back() {
    let date = Utc::now().checked_sub_months(Months::new(1)).unwrap();
    assert_eq!(distance_from_now_in(&date, CalendarUnit::Month), 1);
}

#[test]
fn exactly_one_calendar_year_back() {
    let date = Utc::now().checked_sub_months(Months::new(12)).unwrap();
    assert_eq!(distance_from_now_in(&date, CalendarUnit::Year), 1);
}

#[test]
fn named_units_parse() {
    assert_eq!(distance_from_now_in_named(&ago(7_500), "hours"), Ok(2));
    assert_eq!(distance_from_now_in_named(&ago(7_500), " MIN "), Ok(125));
}

#[test]
fn unknown_unit_name_is_rejected() {
    let err = distance_from_now_in_named(&ago(60), "lightyear").unwrap_err();
    assert_eq!(err, DistanceError::InvalidUnit("lightyear".to_string()));
    assert_eq!(err.to_string(), "invalid calendar unit: lightyear");
}
