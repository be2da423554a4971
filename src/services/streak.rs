// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Streak computation over daily activity records.
//!
//! The calculation is a pure function of the records and a reference date
//! ("today"). It never reads the clock, so callers decide which day counts as
//! today and tests can pin it.
//!
//! Records dated after the reference date are dropped before either streak is
//! computed, and several records on the same day count once.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::models::{ActivityRecord, StreakResult};

/// Compute the current and longest streak for a set of activity records.
///
/// - `current_streak` counts consecutive days ending at `reference_date`
///   (0 if there is no record for `reference_date` itself).
/// - `longest_streak` is the longest run of consecutive days anywhere in the
///   records on or before `reference_date`.
pub fn compute_streak(records: &[ActivityRecord], reference_date: NaiveDate) -> StreakResult {
    if records.is_empty() {
        return StreakResult::default();
    }

    compute_streak_from_dates(records.iter().map(|r| r.date), reference_date)
}

/// Same as [`compute_streak`], for callers that only hold dates.
pub fn compute_streak_from_dates<I>(dates: I, reference_date: NaiveDate) -> StreakResult
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: HashSet<NaiveDate> = dates
        .into_iter()
        .filter(|date| *date <= reference_date)
        .collect();

    StreakResult {
        current_streak: current_run(&days, reference_date),
        longest_streak: longest_run(&days),
    }
}

/// Walk backward from `reference_date` while each day is present.
fn current_run(days: &HashSet<NaiveDate>, reference_date: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = Some(reference_date);

    while let Some(current) = day.filter(|d| days.contains(d)) {
        count += 1;
        day = current.pred_opt();
    }

    count
}

/// Longest run of consecutive days, scanning the dates newest first.
fn longest_run(days: &HashSet<NaiveDate>) -> u32 {
    let mut sorted: Vec<NaiveDate> = days.iter().copied().collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in sorted {
        run = match previous {
            Some(prev) if day.succ_opt() == Some(prev) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}
