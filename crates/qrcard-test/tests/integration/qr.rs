#![allow(clippy::unused_async)]
//! Tests for the QR payload endpoints.
//!
//! Verifies the encode request, payload size classification and filenames.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

/// ## Summary
/// The QR payload is the exact document the download endpoint returns.
#[test_log::test(tokio::test)]
async fn qr_payload_matches_download() {
    let service = create_test_service();
    let form = json!({ "name": "Ada Lovelace", "email": "ada@example.com" });

    let download = post_form(&service, "/api/vcard", &form).await;
    let qr = post_form(&service, "/api/vcard/qr", &form).await;
    qr.assert_status(StatusCode::OK);

    let json = qr.json();
    assert_eq!(json["request"]["payload"].as_str(), Some(download.body.as_str()));
    assert_eq!(
        json["report"]["bytes"].as_u64(),
        u64::try_from(download.body.len()).ok()
    );
    assert_eq!(json["document_filename"], "Ada_Lovelace.vcf");
    assert_eq!(json["image_filename"], "Ada_Lovelace_qrcode.png");
}

/// ## Summary
/// Size and error correction fall back to the configured defaults.
#[test_log::test(tokio::test)]
async fn qr_defaults_applied() {
    let service = create_test_service();

    let response = post_form(
        &service,
        "/api/ical/qr",
        &json!({ "title": "Sync", "startDate": "2024-03-15" }),
    )
    .await;
    response.assert_status(StatusCode::OK);

    let json = response.json();
    assert_eq!(json["request"]["size"], 384);
    assert_eq!(json["request"]["error_correction"], "M");
    assert_eq!(json["image_filename"], "Sync_qrcode.png");
}

/// ## Summary
/// Out-of-range sizes clamp into the supported pixel range.
#[test_log::test(tokio::test)]
async fn qr_size_clamped() {
    let service = create_test_service();

    for (requested, expected) in [(64, 128), (512, 512), (10_000, 2048)] {
        let response = post_form(
            &service,
            "/api/vcard/qr",
            &json!({ "name": "Ada", "size": requested, "ecl": "h" }),
        )
        .await;
        response.assert_status(StatusCode::OK);

        let json = response.json();
        assert_eq!(json["request"]["size"], expected);
        assert_eq!(json["request"]["error_correction"], "H");
    }
}

/// ## Summary
/// Payloads over the warning threshold are flagged but still generated.
#[test_log::test(tokio::test)]
async fn qr_oversized_payload_warns() {
    let service = create_test_service();
    let small = post_form(&service, "/api/vcard/qr", &json!({ "name": "Ada" })).await;
    let small_json = small.json();
    assert_eq!(small_json["report"]["status"], "ok");

    let large = post_form(
        &service,
        "/api/vcard/qr",
        &json!({ "name": "Ada", "note": "x".repeat(2600) }),
    )
    .await;
    large.assert_status(StatusCode::OK);

    let large_json = large.json();
    assert_eq!(large_json["report"]["status"], "warn");
    assert!(large_json["report"]["bytes"].as_u64().unwrap_or_default() > 2500);
    assert_eq!(large_json["compatibility_tip_bytes"], 2900);
}

/// ## Summary
/// The warning threshold is exclusive: exactly 2500 bytes is still ok.
#[test_log::test(tokio::test)]
async fn qr_threshold_boundary() {
    let service = create_test_service();
    let empty_note = post_form(&service, "/api/vcard", &json!({ "name": "Ada" })).await;
    // NOTE line adds "NOTE:" + CRLF around the text.
    let overhead = empty_note.body.len() + "NOTE:\r\n".len();

    for (target, status) in [(2500, "ok"), (2501, "warn")] {
        let note = "x".repeat(target - overhead);
        let response = post_form(
            &service,
            "/api/vcard/qr",
            &json!({ "name": "Ada", "note": note }),
        )
        .await;

        let json = response.json();
        assert_eq!(json["report"]["bytes"].as_u64(), u64::try_from(target).ok());
        assert_eq!(json["report"]["status"], status);
    }
}

/// ## Summary
/// A body that is not a JSON object is rejected with an error message.
#[test_log::test(tokio::test)]
async fn qr_rejects_non_object_form() {
    let service = create_test_service();

    let response = post_form(&service, "/api/ical/qr", &json!(["not", "a", "form"])).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].is_string());
}
