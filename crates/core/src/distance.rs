// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Distance between a reference instant and now.
//!
//! Positive distances mean the date is in the past, negative ones that it is
//! in the future. Every `*_at` function takes "now" explicitly; the others
//! read [`SystemClock`] once per call.
//!
//! Months and years use calendar arithmetic anchored at the earlier of the
//! two instants: the month count is the largest `m` with
//! `earlier + m months <= later`, where adding months clamps to the end of a
//! shorter month (Jan 31 + 1 month = Feb 28). Calendar fields are read in UTC.

use crate::clock::{Clock, SystemClock};
use crate::error::DistanceError;
use crate::phrasing::Phrasing;
use crate::unit::CalendarUnit;
use chrono::{DateTime, Datelike, Months, Utc};

/// Seconds from `date` to now, with sub-second precision.
pub fn distance_from_now(date: &DateTime<Utc>) -> f64 {
    distance_from_now_at(SystemClock.now(), date)
}

pub fn distance_from_now_at(now: DateTime<Utc>, date: &DateTime<Utc>) -> f64 {
    let delta = now.signed_duration_since(*date);
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

/// Whole `unit`s from `date` to now, truncated toward zero.
pub fn distance_from_now_in(date: &DateTime<Utc>, unit: CalendarUnit) -> i64 {
    distance_from_now_in_at(SystemClock.now(), date, unit)
}

pub fn distance_from_now_in_at(
    now: DateTime<Utc>,
    date: &DateTime<Utc>,
    unit: CalendarUnit,
) -> i64 {
    let distance = units_between(now, *date, unit);
    tracing::trace!(%unit, distance, "unit distance");
    distance
}

/// Like [`distance_from_now_in`] for a unit given by name (`"hours"`, `"mo"`, ...).
///
/// The name is validated before the clock is read.
pub fn distance_from_now_in_named(
    date: &DateTime<Utc>,
    unit: &str,
) -> Result<i64, DistanceError> {
    let unit: CalendarUnit = unit.parse()?;
    Ok(distance_from_now_in(date, unit))
}

/// Describe the distance from `date` to now: `"2 days ago"`, `"1 hour from now"`.
///
/// Uses the coarsest unit with a whole distance of at least one. Distances
/// under one second render as `"just now"`.
pub fn human_readable_distance_from_now(date: &DateTime<Utc>) -> String {
    human_readable_distance_at(SystemClock.now(), date)
}

pub fn human_readable_distance_at(now: DateTime<Utc>, date: &DateTime<Utc>) -> String {
    human_readable_distance_with(now, date, &Phrasing::default())
}

pub fn human_readable_distance_with(
    now: DateTime<Utc>,
    date: &DateTime<Utc>,
    phrasing: &Phrasing,
) -> String {
    for unit in CalendarUnit::ALL {
        let n = units_between(now, *date, unit);
        if n == 0 {
            continue;
        }
        let magnitude = n.unsigned_abs();
        let name = if magnitude == 1 {
            unit.singular()
        } else {
            unit.plural()
        };
        let suffix = if n > 0 {
            &phrasing.past_suffix
        } else {
            &phrasing.future_suffix
        };
        return format!("{} {} {}", magnitude, name, suffix);
    }
    phrasing.just_now.clone()
}

fn units_between(now: DateTime<Utc>, date: DateTime<Utc>, unit: CalendarUnit) -> i64 {
    match unit.fixed_seconds() {
        Some(len) => now.signed_duration_since(date).num_seconds() / len,
        None => {
            let months = calendar_months(now, date);
            if unit == CalendarUnit::Year {
                months / 12
            } else {
                months
            }
        }
    }
}

fn calendar_months(now: DateTime<Utc>, date: DateTime<Utc>) -> i64 {
    let (earlier, later, sign) = if date <= now {
        (date, now, 1)
    } else {
        (now, date, -1)
    };
    // Adding this many months lands in `later`'s month, so at most one step back is needed.
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());
    while months > 0 && !reaches(earlier, months, later) {
        months -= 1;
    }
    sign * months
}

fn reaches(earlier: DateTime<Utc>, months: i64, later: DateTime<Utc>) -> bool {
    u32::try_from(months)
        .ok()
        .and_then(|m| earlier.checked_add_months(Months::new(m)))
        .is_some_and(|t| t <= later)
}

#[cfg(test)]
#[path = "distance_tests.rs"]
mod tests;
