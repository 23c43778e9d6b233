//! vCard serialization.

use qrcard_core::types::DocumentKind;

use crate::rfc::content::{ContentLine, DocumentBuilder, SerializedDocument};
use crate::rfc::vcard::core::ContactRecord;

pub const VCARD_VERSION: &str = "4.0";

/// Serializes `record` as a single vCard.
///
/// ## Summary
/// FN, N, ORG, TEL and EMAIL are always present, possibly with empty values.
/// TITLE, the work ORG, URL, ADR and NOTE are omitted when empty. Every line
/// ends in CRLF, including the last.
#[must_use]
pub fn assemble(record: &ContactRecord) -> SerializedDocument {
    let mut builder = DocumentBuilder::new(DocumentKind::VCard);
    builder
        .begin("VCARD")
        .push(ContentLine::raw("VERSION", VCARD_VERSION))
        .push(ContentLine::text("FN", record.name.as_str()))
        .push(ContentLine::structured(
            "N",
            [record.name.as_str(), "", "", "", ""],
        ))
        .push(ContentLine::text("ORG", record.organization.as_str()))
        .push(ContentLine::text("TEL", record.phone.as_str()).with_param("TYPE", "cell"))
        .push(ContentLine::text("EMAIL", record.email.as_str()))
        .push_optional(ContentLine::text("TITLE", record.title.as_str()))
        .push_optional(
            ContentLine::text("ORG", record.work_organization.as_str()).with_param("TYPE", "work"),
        )
        .push_optional(ContentLine::raw("URL", record.url.as_str()))
        .push_optional(
            ContentLine::structured("ADR", record.address_components()).with_param("TYPE", "work"),
        )
        .push_optional(ContentLine::text("NOTE", record.note.as_str()))
        .end("VCARD");

    if record.use_gravatar {
        tracing::trace!("Gravatar requested; photo enrichment is left to the caller");
    }

    builder.build()
}
