//! Document download and QR payload handlers.
//!
//! Both formats share the same request flow: read the JSON form snapshot,
//! run the pipeline, then write either the document itself or the QR encode
//! request with its size report.

pub mod ical;
pub mod vcard;

use salvo::http::{HeaderValue, StatusCode};
use salvo::writing::Json;
use salvo::{Depot, Request, Response};
use serde::Serialize;

use qrcard_core::types::DocumentKind;
use qrcard_rfc::rfc::payload::PayloadSizeReport;
use qrcard_service::error::ServiceError;
use qrcard_service::form::FormState;
use qrcard_service::generate::{Generation, Generator};
use qrcard_service::qr::QrEncodeRequest;

use crate::config::get_config_from_depot;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// QR response payload: what to hand the encoder, plus advisory sizing.
#[derive(Debug, Serialize)]
pub struct QrResponse {
    pub request: QrEncodeRequest,
    pub report: PayloadSizeReport,
    pub compatibility_tip_bytes: usize,
    pub document_filename: String,
    pub image_filename: String,
}

/// ## Summary
/// Reads the form snapshot and runs the pipeline for `kind`.
///
/// Writes an error response and returns `None` when the body is unreadable
/// or the configuration is missing.
async fn generate(
    kind: DocumentKind,
    req: &mut Request,
    depot: &Depot,
    res: &mut Response,
) -> Option<(Generator, FormState, Generation)> {
    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get configuration");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return None;
        }
    };

    let body = match req.payload().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read request body");
            render_error(res, StatusCode::BAD_REQUEST, "Unreadable request body");
            return None;
        }
    };

    let form = match FormState::from_json(&body) {
        Ok(form) => form,
        Err(e @ ServiceError::InvalidFormState(_)) => {
            tracing::debug!(error = %e, "Rejecting form state");
            render_error(res, StatusCode::BAD_REQUEST, &e.to_string());
            return None;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to decode form state");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return None;
        }
    };

    let generator = Generator::new(&settings);
    let generation = match kind {
        DocumentKind::VCard => generator.contact(&form),
        DocumentKind::ICalendar => generator.event(&form),
    };

    Some((generator, form, generation))
}

fn render_error(res: &mut Response, status: StatusCode, message: &str) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.to_string(),
    }));
}

/// ## Summary
/// Writes the serialized document as an attachment.
///
/// ## Side Effects
/// Sets `Content-Type`, `Content-Disposition` and the response body.
fn write_document(res: &mut Response, generation: &Generation) {
    let content_type = generation.document.content_type();
    if let Ok(ct_value) = HeaderValue::from_str(&content_type) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("Content-Type", ct_value, true);
    }

    let disposition = format!("attachment; filename=\"{}\"", generation.filename());
    if let Ok(cd_value) = HeaderValue::from_str(&disposition) {
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Header addition failure is non-fatal"
        )]
        let _ = res.add_header("Content-Disposition", cd_value, true);
    }

    res.status_code(StatusCode::OK);
    if let Err(e) = res.write_body(generation.document.as_bytes().to_vec()) {
        tracing::error!("Failed to write response body: {}", e);
    }
}

/// ## Summary
/// Writes the QR encode request and payload report as JSON.
fn write_qr(res: &mut Response, generator: &Generator, form: &FormState, generation: &Generation) {
    let response = QrResponse {
        request: generator.qr_request(generation, form),
        report: generation.report,
        compatibility_tip_bytes: generator.payload_config().compatibility_tip_bytes,
        document_filename: generation.filename(),
        image_filename: generation.qr_image_filename(),
    };
    res.status_code(StatusCode::OK);
    res.render(Json(response));
}

/// ## Summary
/// Shared body of the document download handlers.
async fn handle_document(kind: DocumentKind, req: &mut Request, depot: &Depot, res: &mut Response) {
    if let Some((_, _, generation)) = generate(kind, req, depot, res).await {
        write_document(res, &generation);
    }
}

/// ## Summary
/// Shared body of the QR handlers.
async fn handle_qr(kind: DocumentKind, req: &mut Request, depot: &Depot, res: &mut Response) {
    if let Some((generator, form, generation)) = generate(kind, req, depot, res).await {
        write_qr(res, &generator, &form, &generation);
    }
}
