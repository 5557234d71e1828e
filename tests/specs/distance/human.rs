//! Human-readable distance against the system clock.

use crate::prelude::*;

#[test]
fn singular_and_plural() {
    assert_reads(ago(3_600 + 30), "1 hour ago");
    assert_reads(ago(2 * 3_600 + 30), "2 hours ago");
}

#[test]
fn future_reads_from_now() {
    assert_reads(from_now(2 * 86_400 + 600), "2 days from now");
}

#[test]
fn just_under_a_day_reads_in_hours() {
    assert_reads(ago(23 * 3_600 + 59 * 60 + 59), "23 hours ago");
}

#[test]
fn current_instant_reads_just_now() {
    assert_reads(Utc::now(), "just now");
}

#[test]
fn years_are_coarsest() {
    let date = Utc::now().checked_sub_months(Months::new(40)).unwrap();
    assert_reads(date, "3 years ago");
}
