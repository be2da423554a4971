// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Streak result value type.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Current and longest run of consecutive active days.
///
/// `longest_streak >= current_streak` always holds for values produced by
/// [`crate::services::streak::compute_streak`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl StreakResult {
    pub fn new(current_streak: u32, longest_streak: u32) -> Self {
        Self {
            current_streak,
            longest_streak,
        }
    }
}
