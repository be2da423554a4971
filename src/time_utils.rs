// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format used for calendar days in paths, queries and responses.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current UTC calendar day, used as the streak reference date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT).ok()
}

/// Format a calendar day as `YYYY-MM-DD`.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}
