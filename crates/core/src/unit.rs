// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar units used to scope a distance.

use crate::error::DistanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity for unit-scoped distance queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    /// All units, coarsest first.
    pub const ALL: [CalendarUnit; 7] = [
        CalendarUnit::Year,
        CalendarUnit::Month,
        CalendarUnit::Week,
        CalendarUnit::Day,
        CalendarUnit::Hour,
        CalendarUnit::Minute,
        CalendarUnit::Second,
    ];

    pub fn singular(self) -> &'static str {
        match self {
            CalendarUnit::Second => "second",
            CalendarUnit::Minute => "minute",
            CalendarUnit::Hour => "hour",
            CalendarUnit::Day => "day",
            CalendarUnit::Week => "week",
            CalendarUnit::Month => "month",
            CalendarUnit::Year => "year",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            CalendarUnit::Second => "seconds",
            CalendarUnit::Minute => "minutes",
            CalendarUnit::Hour => "hours",
            CalendarUnit::Day => "days",
            CalendarUnit::Week => "weeks",
            CalendarUnit::Month => "months",
            CalendarUnit::Year => "years",
        }
    }

    /// Length in seconds for units that have one in UTC.
    ///
    /// Months and years vary with the calendar and return `None`.
    pub fn fixed_seconds(self) -> Option<i64> {
        match self {
            CalendarUnit::Second => Some(1),
            CalendarUnit::Minute => Some(60),
            CalendarUnit::Hour => Some(3_600),
            CalendarUnit::Day => Some(86_400),
            CalendarUnit::Week => Some(604_800),
            CalendarUnit::Month | CalendarUnit::Year => None,
        }
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

impl FromStr for CalendarUnit {
    type Err = DistanceError;

    /// Parse `"hour"`, `"Hours"`, `"h"`, `"hr"` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => CalendarUnit::Second,
            "m" | "min" | "mins" | "minute" | "minutes" => CalendarUnit::Minute,
            "h" | "hr" | "hrs" | "hour" | "hours" => CalendarUnit::Hour,
            "d" | "day" | "days" => CalendarUnit::Day,
            "w" | "wk" | "wks" | "week" | "weeks" => CalendarUnit::Week,
            "mo" | "mon" | "month" | "months" => CalendarUnit::Month,
            "y" | "yr" | "yrs" | "year" | "years" => CalendarUnit::Year,
            _ => {
                tracing::warn!(unit = s, "rejected calendar unit");
                return Err(DistanceError::InvalidUnit(s.to_string()));
            }
        };
        Ok(unit)
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
