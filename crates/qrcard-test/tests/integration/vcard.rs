#![allow(clippy::unused_async)]
//! Tests for the vCard download endpoint.
//!
//! Verifies line layout, escaping and download naming.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

// ============================================================================
// Layout
// ============================================================================

/// ## Summary
/// A full contact produces every line in order, wrapped in BEGIN/END.
#[test_log::test(tokio::test)]
async fn vcard_full_contact_layout() {
    let service = create_test_service();
    let form = json!({
        "name": "Ada Lovelace",
        "org": "Analytical Engines",
        "phone": "+44 20 7946 0000",
        "email": "Ada@Example.COM",
        "title": "Mathematician",
        "work": "Babbage & Co",
        "url": "https://example.com/ada",
        "street": "12 St James's Square",
        "city": "London",
        "postal": "SW1Y 4JH",
        "country": "UK",
        "note": "Met at the salon",
        "useGravatar": true,
    });

    let response = post_form(&service, "/api/vcard", &form).await;
    response.assert_status(StatusCode::OK);

    assert_eq!(
        response.lines(),
        vec![
            "BEGIN:VCARD",
            "VERSION:4.0",
            "FN:Ada Lovelace",
            "N:Ada Lovelace;;;;",
            "ORG:Analytical Engines",
            "TEL;TYPE=cell:+44 20 7946 0000",
            "EMAIL:ada@example.com",
            "TITLE:Mathematician",
            "ORG;TYPE=work:Babbage & Co",
            "URL:https://example.com/ada",
            "ADR;TYPE=work:;;12 St James's Square;London;;SW1Y 4JH;UK",
            "NOTE:Met at the salon",
            "END:VCARD",
        ]
    );
}

/// ## Summary
/// Optional lines vanish when their fields are empty.
#[test_log::test(tokio::test)]
async fn vcard_minimal_contact_omits_optional_lines() {
    let service = create_test_service();

    let response = post_form(&service, "/api/vcard", &json!({ "name": "Ada" })).await;
    response.assert_status(StatusCode::OK);

    for absent in ["TITLE", "URL", "ADR", "NOTE", "ORG;TYPE=work"] {
        assert!(
            response.lines_starting_with(absent).is_empty(),
            "{absent} should be omitted"
        );
    }
    assert_eq!(response.lines_starting_with("FN:"), vec!["FN:Ada"]);
    assert_eq!(response.lines().first().copied(), Some("BEGIN:VCARD"));
    assert_eq!(response.lines().last().copied(), Some("END:VCARD"));
}

// ============================================================================
// Escaping
// ============================================================================

/// ## Summary
/// Text reserved characters are escaped and newlines never split a line.
#[test_log::test(tokio::test)]
async fn vcard_escapes_reserved_characters() {
    let service = create_test_service();
    let form = json!({
        "name": "Ada, Countess; of Lovelace",
        "note": "line one\r\nline two\\end",
    });

    let response = post_form(&service, "/api/vcard", &form).await;
    response.assert_status(StatusCode::OK);

    assert_eq!(
        response.lines_starting_with("FN:"),
        vec!["FN:Ada\\, Countess\\; of Lovelace"]
    );
    assert_eq!(
        response.lines_starting_with("NOTE:"),
        vec!["NOTE:line one\\nline two\\\\end"]
    );
    assert!(!response.body.replace("\r\n", "").contains('\n'));
}

// ============================================================================
// Download naming
// ============================================================================

/// ## Summary
/// The attachment filename derives from the contact name.
#[test_log::test(tokio::test)]
async fn vcard_download_headers() {
    let service = create_test_service();

    let response = post_form(&service, "/api/vcard", &json!({ "name": "Ada, Lovelace" })).await;
    response.assert_status(StatusCode::OK);
    response.assert_header("content-type", "text/vcard; charset=utf-8");
    response.assert_header(
        "content-disposition",
        "attachment; filename=\"Ada_Lovelace.vcf\"",
    );
}

/// ## Summary
/// An unnamed contact downloads under the fallback name.
#[test_log::test(tokio::test)]
async fn vcard_unnamed_contact_uses_fallback_filename() {
    let service = create_test_service();

    let response = post_form(&service, "/api/vcard", &json!({ "name": "!!!" })).await;
    response.assert_status(StatusCode::OK);
    response.assert_header(
        "content-disposition",
        "attachment; filename=\"Contact.vcf\"",
    );
}
