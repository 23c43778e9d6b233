#![allow(clippy::unused_async)]
//! Tests for configured behaviour.
//!
//! Verifies that payload budget and calendar settings reach the generated
//! documents.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

/// ## Summary
/// A lowered warning threshold flags an ordinary contact.
#[test_log::test(tokio::test)]
async fn configured_warn_threshold_applies() {
    let mut settings = default_settings();
    settings.payload.warn_threshold_bytes = 100;
    settings.payload.compatibility_tip_bytes = 150;
    let service = create_test_service_with(settings);

    let response = post_form(
        &service,
        "/api/vcard/qr",
        &json!({ "name": "Ada Lovelace", "email": "ada@example.com", "phone": "+44 20 7946 0000" }),
    )
    .await;
    response.assert_status(StatusCode::OK);

    let json = response.json();
    assert!(json["report"]["bytes"].as_u64().unwrap_or_default() > 100);
    assert_eq!(json["report"]["status"], "warn");
    assert_eq!(json["compatibility_tip_bytes"], 150);
}

/// ## Summary
/// Timed events without a timezone use the configured default in TZID.
#[test_log::test(tokio::test)]
async fn configured_default_timezone_applies() {
    let mut settings = default_settings();
    settings.calendar.default_timezone = "Asia/Tokyo".to_string();
    let service = create_test_service_with(settings);

    let response = post_form(
        &service,
        "/api/ical",
        &json!({ "title": "Standup", "startDate": "2024-06-10", "startTime": "09:00" }),
    )
    .await;
    response.assert_status(StatusCode::OK);

    assert_eq!(
        response.lines_starting_with("DTSTART"),
        vec!["DTSTART;TZID=Asia/Tokyo:20240610T090000"]
    );
    assert_eq!(
        response.lines_starting_with("DTEND"),
        vec!["DTEND;TZID=Asia/Tokyo:20240610T100000"]
    );
}

/// ## Summary
/// UID domain and product identifier come from the calendar settings.
#[test_log::test(tokio::test)]
async fn configured_calendar_identity_applies() {
    let mut settings = default_settings();
    settings.calendar.uid_domain = "qr.example.com".to_string();
    settings.calendar.product_id = "-//Example//QR//EN".to_string();
    let service = create_test_service_with(settings);

    let response = post_form(
        &service,
        "/api/ical",
        &json!({ "title": "Launch", "startDate": "2024-06-10" }),
    )
    .await;
    response.assert_status(StatusCode::OK);

    let uids = response.lines_starting_with("UID:");
    assert_eq!(uids.len(), 1);
    assert!(uids.iter().all(|uid| uid.starts_with("UID:event-") && uid.ends_with("@qr.example.com")));
    assert_eq!(
        response.lines_starting_with("PRODID:"),
        vec!["PRODID:-//Example//QR//EN"]
    );
}
