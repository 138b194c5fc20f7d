// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a workout duration in seconds as `"45m"` or `"1h 05m"`.
pub fn format_duration(seconds: f64) -> String {
    let total_minutes = (seconds.max(0.0) / 60.0).round() as u64;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    if hours == 0 {
        format!("{}m", minutes)
    } else {
        format!("{}h {:02}m", hours, minutes)
    }
}
