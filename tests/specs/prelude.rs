//! Test helpers for behavioral specifications.
//!
//! Instants are built relative to the real system clock, so every helper
//! leaves a margin well above the time a test takes to run.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use chrono::{DateTime, Months, TimeDelta, Utc};
pub use datedist_core::*;

/// An instant `secs` seconds in the past.
pub fn ago(secs: i64) -> DateTime<Utc> {
    Utc::now() - TimeDelta::seconds(secs)
}

/// An instant `secs` seconds in the future.
pub fn from_now(secs: i64) -> DateTime<Utc> {
    Utc::now() + TimeDelta::seconds(secs)
}

/// Assert a rendered distance, showing a diff on mismatch.
pub fn assert_reads(date: DateTime<Utc>, expected: &str) {
    similar_asserts::assert_eq!(human_readable_distance_from_now(&date), expected);
}
