//! The generate pipeline: collect, assemble, size.

use chrono::Utc;
use uuid::Uuid;

use qrcard_core::config::{CalendarConfig, PayloadConfig, QrConfig, Settings};
use qrcard_core::constants::{QR_IMAGE_EXTENSION, QR_IMAGE_SUFFIX};
use qrcard_core::types::DocumentKind;
use qrcard_core::util::filename::{derive_filename, document_filename};
use qrcard_rfc::rfc::content::SerializedDocument;
use qrcard_rfc::rfc::ical::{self, GenerationContext};
use qrcard_rfc::rfc::payload::PayloadSizeReport;
use qrcard_rfc::rfc::vcard;

use crate::form::{FormState, collect_contact, collect_event};
use crate::qr::QrEncodeRequest;

/// Output of one generate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub document: SerializedDocument,
    pub report: PayloadSizeReport,
    /// Record name used for download filenames (contact name or event
    /// title), untouched by placeholder logic.
    pub display_name: String,
}

impl Generation {
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.document.kind()
    }

    /// `<name>.vcf` / `<name>.ics`.
    #[must_use]
    pub fn filename(&self) -> String {
        document_filename(&self.display_name, self.kind())
    }

    /// `<name>_qrcode.png`.
    #[must_use]
    pub fn qr_image_filename(&self) -> String {
        derive_filename(
            &self.display_name,
            self.kind(),
            QR_IMAGE_SUFFIX,
            QR_IMAGE_EXTENSION,
        )
    }
}

/// Runs the pipelines with the configured payload budget and calendar
/// defaults. Holds no per-call state; each call starts from its own form
/// snapshot.
#[derive(Debug, Clone)]
pub struct Generator {
    payload: PayloadConfig,
    qr: QrConfig,
    calendar: CalendarConfig,
}

impl Generator {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            payload: settings.payload.clone(),
            qr: settings.qr.clone(),
            calendar: settings.calendar.clone(),
        }
    }

    #[must_use]
    pub const fn payload_config(&self) -> &PayloadConfig {
        &self.payload
    }

    /// Generates a vCard from `form`.
    #[must_use]
    #[tracing::instrument(skip_all)]
    pub fn contact(&self, form: &FormState) -> Generation {
        let record = collect_contact(form);
        let document = vcard::assemble(&record);
        self.finish(document, record.name)
    }

    /// Generates an iCalendar event from `form` with a fresh UID and the
    /// current instant as DTSTAMP.
    #[must_use]
    #[tracing::instrument(skip_all)]
    pub fn event(&self, form: &FormState) -> Generation {
        let context = GenerationContext::new(new_event_uid(&self.calendar.uid_domain), Utc::now());
        self.event_with_context(form, context)
    }

    /// Generates an iCalendar event with caller-supplied UID and DTSTAMP.
    #[must_use]
    pub fn event_with_context(&self, form: &FormState, context: GenerationContext) -> Generation {
        let record = collect_event(form, &self.calendar.default_timezone);
        let context = context
            .with_product_id(self.calendar.product_id.as_str())
            .with_default_timezone(self.calendar.default_timezone.as_str());
        let document = ical::assemble(&record, &context);
        self.finish(document, record.title)
    }

    /// The QR encode request for a finished generation.
    #[must_use]
    pub fn qr_request(&self, generation: &Generation, form: &FormState) -> QrEncodeRequest {
        QrEncodeRequest::from_form(generation.document.as_str(), form, &self.qr)
    }

    fn finish(&self, document: SerializedDocument, display_name: String) -> Generation {
        let report = PayloadSizeReport::for_document(&document, self.payload.warn_threshold_bytes);
        tracing::debug!(
            kind = %document.kind(),
            bytes = report.bytes,
            status = report.status.as_str(),
            "Document generated"
        );
        Generation {
            document,
            report,
            display_name,
        }
    }
}

/// Time-ordered, randomly suffixed event UID.
#[must_use]
pub fn new_event_uid(domain: &str) -> String {
    format!("event-{}@{domain}", Uuid::now_v7().simple())
}
