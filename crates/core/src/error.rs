// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for date distance operations.

use thiserror::Error;

/// Errors surfaced by unit parsing and phrasing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    #[error("invalid calendar unit: {0}")]
    InvalidUnit(String),
    #[error("invalid phrasing config: {0}")]
    Config(String),
}
