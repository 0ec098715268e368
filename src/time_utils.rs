// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Utc};

/// Display label used before a stored timestamp has been observed.
pub const JUST_NOW: &str = "Just now";

/// Render a timestamp relative to `now` the way the feed displays it:
/// "Just now", "5m ago", "3h ago", "2d ago", then "Jan 5" past a week.
pub fn relative_label(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(date);

    let secs = diff.num_seconds();
    if secs < 60 {
        return JUST_NOW.to_string();
    }

    let mins = diff.num_minutes();
    if mins < 60 {
        return format!("{mins}m ago");
    }

    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }

    let days = diff.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }

    format!("{} {}", month_abbrev(date.month()), date.day())
}

/// Relative label for a stored RFC3339 string; unparseable or missing
/// values render as "Just now" (matches how unresolved server timestamps
/// are displayed).
pub fn relative_label_rfc3339(raw: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => relative_label(date.with_timezone(&Utc), now),
        Err(_) => JUST_NOW.to_string(),
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn relative_label_buckets() {
        let now = at("2026-08-05T12:00:00Z");

        assert_eq!(relative_label(at("2026-08-05T11:59:30Z"), now), "Just now");
        assert_eq!(relative_label(at("2026-08-05T11:55:00Z"), now), "5m ago");
        assert_eq!(relative_label(at("2026-08-05T09:00:00Z"), now), "3h ago");
        assert_eq!(relative_label(at("2026-08-03T12:00:00Z"), now), "2d ago");
    }

    #[test]
    fn relative_label_older_than_a_week() {
        let now = at("2026-08-05T12:00:00Z");
        let date = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();
        assert_eq!(relative_label(date, now), "Jan 5");
    }

    #[test]
    fn relative_label_rfc3339_fallback() {
        let now = at("2026-08-05T12:00:00Z");
        assert_eq!(relative_label_rfc3339("not-a-date", now), "Just now");
        assert_eq!(relative_label_rfc3339("", now), "Just now");
        assert_eq!(
            relative_label_rfc3339("2026-08-05T11:00:00Z", now),
            "1h ago"
        );
    }
}
