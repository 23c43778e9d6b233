//! Field collection: form snapshot to typed record.

use qrcard_rfc::rfc::ical::EventRecord;
use qrcard_rfc::rfc::vcard::ContactRecord;

use super::FormState;
use super::fields::{contact, event};

/// Reads a contact from the form. Missing fields become empty values.
#[must_use]
pub fn collect_contact(form: &FormState) -> ContactRecord {
    ContactRecord {
        name: form.text(contact::NAME),
        organization: form.text(contact::ORGANIZATION),
        title: form.text(contact::TITLE),
        phone: form.text(contact::PHONE),
        email: form.email(contact::EMAIL),
        use_gravatar: form.flag(contact::USE_GRAVATAR),
        work_organization: form.text(contact::WORK_ORGANIZATION),
        url: form.text(contact::URL),
        street: form.text(contact::STREET),
        city: form.text(contact::CITY),
        region: form.text(contact::REGION),
        postal_code: form.text(contact::POSTAL_CODE),
        country: form.text(contact::COUNTRY),
        note: form.text(contact::NOTE),
    }
}

/// Reads an event from the form.
///
/// A time field is hidden behind its checkbox: when `hasStartTime` or
/// `hasEndTime` is present and unchecked, the matching time reads as empty.
/// Clients that never send the checkbox get the time as entered. An empty
/// timezone takes `default_timezone`.
#[must_use]
pub fn collect_event(form: &FormState, default_timezone: &str) -> EventRecord {
    let timezone = match form.text(event::TIMEZONE) {
        tz if tz.is_empty() => default_timezone.to_string(),
        tz => tz,
    };

    EventRecord {
        title: form.text(event::TITLE),
        start_date: form.text(event::START_DATE),
        start_time: gated_time(form, event::HAS_START_TIME, event::START_TIME),
        end_date: form.text(event::END_DATE),
        end_time: gated_time(form, event::HAS_END_TIME, event::END_TIME),
        timezone,
        location: form.text(event::LOCATION),
        description: form.text(event::DESCRIPTION),
        organizer_name: form.text(event::ORGANIZER),
        organizer_email: form.email(event::ORGANIZER_EMAIL),
    }
}

fn gated_time(form: &FormState, checkbox: &str, field: &str) -> String {
    if form.contains(checkbox) && !form.flag(checkbox) {
        String::new()
    } else {
        form.text(field)
    }
}
