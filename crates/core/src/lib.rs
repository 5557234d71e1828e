// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! datedist-core: elapsed and remaining time between an instant and now

pub mod clock;
pub mod distance;
pub mod error;
pub mod phrasing;
pub mod unit;

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use clock::{Clock, SystemClock};
pub use distance::{
    distance_from_now, distance_from_now_at, distance_from_now_in, distance_from_now_in_at,
    distance_from_now_in_named, human_readable_distance_at, human_readable_distance_from_now,
    human_readable_distance_with,
};
pub use error::DistanceError;
pub use phrasing::Phrasing;
pub use unit::CalendarUnit;
