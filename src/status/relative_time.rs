//! Short relative phrases for "last revised" and "next due" displays.
//!
//! Thresholds use integer-floor division, so 119 seconds is still "1m ago".

use crate::calendar::Calendar;
use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Timestamps this far in the future count as clock skew and read as "now".
const SKEW_TOLERANCE_SECS: i64 = 60;

/// Absolute short date (day/month/year) of the instant's normalized day.
pub fn short_date(calendar: &Calendar, instant: DateTime<Utc>) -> String {
    calendar.day_of(instant).format("%d/%m/%Y").to_string()
}

/// Renders how long ago `past` happened relative to `now`.
pub fn time_ago(calendar: &Calendar, past: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(past) = past else {
        return "Never".to_string();
    };

    let mut diff = (calendar.shift(now) - calendar.shift(past)).num_seconds();
    if diff < 0 {
        if diff < -SKEW_TOLERANCE_SECS {
            // Future timestamps should not reach this path; show the date rather than a negative age
            return short_date(calendar, past);
        }
        diff = 0;
    }

    if diff < MINUTE {
        "Just now".to_string()
    } else if diff < HOUR {
        format!("{}m ago", diff / MINUTE)
    } else if diff < DAY {
        format!("{}h ago", diff / HOUR)
    } else if diff < WEEK {
        format!("{}d ago", diff / DAY)
    } else {
        short_date(calendar, past)
    }
}

/// Renders how far ahead `future` lies relative to `now`.
pub fn time_until(calendar: &Calendar, future: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(future) = future else {
        return "-".to_string();
    };

    let diff = (calendar.shift(future) - calendar.shift(now)).num_seconds();

    if diff < MINUTE {
        "Now".to_string()
    } else if diff < HOUR {
        format!("in {}m", diff / MINUTE)
    } else if diff < DAY {
        format!("in {}h", diff / HOUR)
    } else if diff < WEEK {
        format!("in {}d", diff / DAY)
    } else {
        short_date(calendar, future)
    }
}
