//! Calendar-day normalization and instant parsing.
//!
//! Stored timestamps are instants, but due status is decided per calendar day.
//! A `Calendar` shifts every instant backward by a fixed offset before taking its
//! date, so a problem touched between midnight and the offset hour counts for the
//! previous day. The offset is a policy constant tuned for one viewing timezone,
//! not a timezone conversion: viewers elsewhere will see shifted day boundaries.

use crate::error::{Result, RevisionError};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Default backward shift applied before extracting the calendar day.
pub const DEFAULT_DAY_OFFSET_HOURS: i64 = 6;

/// Reduces instants to calendar days using a fixed backward offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calendar {
    offset: Duration,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            offset: Duration::hours(DEFAULT_DAY_OFFSET_HOURS),
        }
    }
}

impl Calendar {
    /// Offset must lie within one day in either direction.
    pub fn with_offset_hours(hours: i64) -> Result<Self> {
        if !(-23..=23).contains(&hours) {
            return Err(RevisionError::Config(format!(
                "day offset must be within +/-23 hours, got {}",
                hours
            )));
        }
        Ok(Self {
            offset: Duration::hours(hours),
        })
    }

    pub fn offset(&self) -> Duration {
        self.offset
    }

    /// Shifts the instant back by the offset, leaving it untouched at the edge of
    /// chrono's representable range.
    pub fn shift(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        instant.checked_sub_signed(self.offset).unwrap_or(instant)
    }

    /// Calendar day an instant is attributed to.
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.shift(instant).date_naive()
    }

    /// `None` is the "no date" sentinel; callers handle it before formatting.
    pub fn normalize(&self, instant: Option<DateTime<Utc>>) -> Option<NaiveDate> {
        instant.map(|i| self.day_of(i))
    }

    /// Whole calendar days from `from` to `to` (negative when `to` is earlier).
    pub fn days_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
        (self.day_of(to) - self.day_of(from)).num_days()
    }
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC,
/// which is what the store writes when no zone is attached) and a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(RevisionError::InvalidInstant(raw.to_string()))
}

/// Parses an optional timestamp; empty strings count as missing.
pub fn parse_optional_instant(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_instant(value).map(Some),
    }
}

/// RFC 3339 with second precision and a `Z` suffix.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
