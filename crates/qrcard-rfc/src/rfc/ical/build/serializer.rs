//! iCalendar event serializer (RFC 5545).

use qrcard_core::types::DocumentKind;

use super::context::GenerationContext;
use crate::rfc::content::{ContentLine, DocumentBuilder, SerializedDocument, Value};
use crate::rfc::ical::core::{DateToken, EventRecord, Schedule, format_utc_stamp};

/// Placeholder summary when the event has no title.
pub const EVENT_TITLE_REQUIRED: &str = "Event title required";
/// Placeholder summary when the event has no usable start date.
pub const START_DATE_REQUIRED: &str = "Start date required";

const ICAL_VERSION: &str = "2.0";

/// Serializes `record` as a single-event calendar.
///
/// A record without a title or a parseable start date yields a minimal
/// [`placeholder`] naming the missing field instead of the event.
#[must_use]
pub fn assemble(record: &EventRecord, context: &GenerationContext) -> SerializedDocument {
    if record.title.is_empty() {
        tracing::debug!("Event title missing, emitting placeholder");
        return placeholder(EVENT_TITLE_REQUIRED);
    }

    let schedule = match Schedule::resolve(record, &context.default_timezone) {
        Ok(schedule) => schedule,
        Err(e) => {
            tracing::debug!(error = %e, "Start date unusable, emitting placeholder");
            return placeholder(START_DATE_REQUIRED);
        }
    };

    let mut builder = DocumentBuilder::new(DocumentKind::ICalendar);
    builder
        .begin("VCALENDAR")
        .push(ContentLine::raw("VERSION", ICAL_VERSION))
        .push(ContentLine::text("PRODID", context.product_id.as_str()))
        .push(ContentLine::raw("CALSCALE", "GREGORIAN"))
        .begin("VEVENT")
        .push(ContentLine::text("UID", context.uid.as_str()))
        .push(ContentLine::raw("DTSTAMP", format_utc_stamp(context.stamp)))
        .push(date_line("DTSTART", schedule.start_token(), &schedule))
        .push(date_line("DTEND", schedule.end_token(), &schedule))
        .push(ContentLine::text("SUMMARY", record.title.as_str()))
        .push_optional(ContentLine::text("LOCATION", record.location.as_str()))
        .push_optional(ContentLine::text("DESCRIPTION", record.description.as_str()))
        .push_optional(organizer_line(record))
        .push(ContentLine::raw("STATUS", "CONFIRMED"))
        .push(ContentLine::raw("SEQUENCE", "0"))
        .end("VEVENT")
        .end("VCALENDAR");

    builder.build()
}

/// Minimal calendar carrying `summary` as its only event property.
///
/// Parseable by calendar clients, so the user sees the diagnostic in place of
/// an event.
#[must_use]
pub fn placeholder(summary: &str) -> SerializedDocument {
    let mut builder = DocumentBuilder::new(DocumentKind::ICalendar);
    builder
        .begin("VCALENDAR")
        .push(ContentLine::raw("VERSION", ICAL_VERSION))
        .begin("VEVENT")
        .push(ContentLine::text("SUMMARY", summary))
        .end("VEVENT")
        .end("VCALENDAR");
    builder.build()
}

/// DTSTART/DTEND line: `VALUE=DATE` for all-day events, `TZID` otherwise.
fn date_line(name: &str, token: DateToken, schedule: &Schedule) -> ContentLine {
    let line = ContentLine::raw(name, token.to_string());
    match schedule {
        Schedule::AllDay { .. } => line.with_param("VALUE", "DATE"),
        Schedule::Timed { tzid, .. } => line.with_param("TZID", tzid.as_str()),
    }
}

/// ORGANIZER line, empty (and so omitted) without an email address. The
/// display name is only attached alongside an address.
fn organizer_line(record: &EventRecord) -> ContentLine {
    let line = ContentLine::new(
        "ORGANIZER",
        Value::Mailto(record.organizer_email.clone()),
    );
    if record.organizer_email.is_empty() {
        line
    } else {
        line.with_param("CN", record.organizer_name.as_str())
    }
}
