//! iCalendar DATE and DATE-TIME tokens (RFC 5545 §3.3.4, §3.3.5).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::error::{RfcError, RfcResult};

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Parses an ISO `YYYY-MM-DD` calendar date.
///
/// ## Errors
/// Returns a parse error for empty or malformed input.
pub fn parse_date(s: &str) -> RfcResult<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(RfcError::ValidationError("date is empty".to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RfcError::ParseError(format!("invalid date '{s}': {e}")))
}

/// Parses an `HH:MM` time of day. `HH:MM:SS` is accepted too, but the
/// seconds are discarded since the form has no seconds granularity.
///
/// ## Errors
/// Returns a parse error for empty or malformed input.
pub fn parse_time(s: &str) -> RfcResult<NaiveTime> {
    let s = s.trim();
    if s.is_empty() {
        return Err(RfcError::ValidationError("time is empty".to_string()));
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map(|t| t.with_second(0).unwrap_or(t))
        .map_err(|e| RfcError::ParseError(format!("invalid time '{s}': {e}")))
}

/// A DTSTART/DTEND value: date-only for all-day events, local date-time
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_FORMAT)),
        }
    }
}

/// The calendar day after `date`, rolling over months and years.
///
/// Saturates at the last representable date.
#[must_use]
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Formats an instant as a UTC DATE-TIME (`YYYYMMDDTHHMMSSZ`) for DTSTAMP.
#[must_use]
pub fn format_utc_stamp(instant: DateTime<Utc>) -> String {
    instant.format(UTC_STAMP_FORMAT).to_string()
}
