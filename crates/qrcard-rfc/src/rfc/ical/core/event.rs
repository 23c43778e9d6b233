//! Calendar event record and its resolved schedule.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use super::datetime::{DateToken, next_day, parse_date, parse_time};
use crate::error::RfcResult;

/// Event fields as collected from the form. All values are trimmed text;
/// empty means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    pub title: String,
    /// ISO `YYYY-MM-DD`.
    pub start_date: String,
    /// `HH:MM`.
    pub start_time: String,
    /// ISO `YYYY-MM-DD`; defaults to the start date.
    pub end_date: String,
    /// `HH:MM`.
    pub end_time: String,
    /// IANA timezone identifier, passed through verbatim.
    pub timezone: String,
    pub location: String,
    pub description: String,
    pub organizer_name: String,
    /// Lower-cased address.
    pub organizer_email: String,
}

impl EventRecord {
    /// Whether the event has no time of day. Derived from the time fields on
    /// every call, never stored.
    #[must_use]
    pub fn is_all_day(&self) -> bool {
        is_all_day(
            parse_time(&self.start_time).ok(),
            parse_time(&self.end_time).ok(),
        )
    }
}

/// An event is all-day when neither a start nor an end time is present.
#[must_use]
pub const fn is_all_day(start_time: Option<NaiveTime>, end_time: Option<NaiveTime>) -> bool {
    start_time.is_none() && end_time.is_none()
}

/// Start and end of an event, ready for DTSTART/DTEND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// End date is exclusive.
    AllDay { start: NaiveDate, end: NaiveDate },
    Timed {
        start: NaiveDateTime,
        end: NaiveDateTime,
        tzid: String,
    },
}

impl Schedule {
    /// Resolves the schedule of `record`.
    ///
    /// A missing or unparseable end date falls back to the start date. An
    /// all-day event whose end is not after its start ends the following day.
    /// When only one time of day is given the other is placed one hour away
    /// from it. A timed event without a timezone uses `default_timezone`.
    ///
    /// ## Errors
    /// Returns an error if the start date is empty or malformed.
    pub fn resolve(record: &EventRecord, default_timezone: &str) -> RfcResult<Self> {
        let start_date = parse_date(&record.start_date)?;
        let end_date = match parse_date(&record.end_date) {
            Ok(date) => date,
            Err(e) => {
                if !record.end_date.is_empty() {
                    tracing::debug!(error = %e, "Ignoring unparseable end date");
                }
                start_date
            }
        };

        let start_time = parse_time(&record.start_time).ok();
        let end_time = parse_time(&record.end_time).ok();

        if is_all_day(start_time, end_time) {
            let end = if end_date > start_date {
                end_date
            } else {
                next_day(start_date)
            };
            return Ok(Self::AllDay {
                start: start_date,
                end,
            });
        }

        let hour = TimeDelta::hours(1);
        let start = start_date.and_time(start_time.or(end_time).unwrap_or_default());
        let end = end_date.and_time(end_time.or(start_time).unwrap_or_default());
        let start = if start_time.is_some() {
            start
        } else {
            start.checked_sub_signed(hour).unwrap_or(start)
        };
        let end = if end_time.is_some() {
            end
        } else {
            end.checked_add_signed(hour).unwrap_or(end)
        };

        let tzid = if record.timezone.is_empty() {
            default_timezone.to_string()
        } else {
            record.timezone.clone()
        };

        Ok(Self::Timed { start, end, tzid })
    }

    #[must_use]
    pub const fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    #[must_use]
    pub const fn start_token(&self) -> DateToken {
        match self {
            Self::AllDay { start, .. } => DateToken::Date(*start),
            Self::Timed { start, .. } => DateToken::DateTime(*start),
        }
    }

    #[must_use]
    pub const fn end_token(&self) -> DateToken {
        match self {
            Self::AllDay { end, .. } => DateToken::Date(*end),
            Self::Timed { end, .. } => DateToken::DateTime(*end),
        }
    }
}
