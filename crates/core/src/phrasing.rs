// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Words used by the human-readable distance.
//!
//! ```toml
//! just_now = "right now"
//! past_suffix = "ago"
//! future_suffix = "from now"
//! ```
//!
//! Missing keys fall back to the English defaults.

use crate::error::DistanceError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Phrasing {
    /// Rendered when the distance is under one second.
    pub just_now: String,
    pub past_suffix: String,
    pub future_suffix: String,
}

impl Default for Phrasing {
    fn default() -> Self {
        Self {
            just_now: "just now".to_string(),
            past_suffix: "ago".to_string(),
            future_suffix: "from now".to_string(),
        }
    }
}

impl Phrasing {
    /// Parse a phrasing document. Empty phrases are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self, DistanceError> {
        let phrasing: Phrasing = toml::from_str(content).map_err(|e| {
            tracing::warn!(error = %e, "rejected phrasing config");
            DistanceError::Config(e.to_string())
        })?;
        phrasing.validate()?;
        Ok(phrasing)
    }

    fn validate(&self) -> Result<(), DistanceError> {
        let fields = [
            ("just_now", &self.just_now),
            ("past_suffix", &self.past_suffix),
            ("future_suffix", &self.future_suffix),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                tracing::warn!(field = name, "rejected phrasing config");
                return Err(DistanceError::Config(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "phrasing_tests.rs"]
mod tests;
