use salvo::{Depot, Request, Response, Router, handler};

use qrcard_core::constants::{ICAL_ROUTE_COMPONENT, QR_ROUTE_COMPONENT};
use qrcard_core::types::DocumentKind;

use super::{handle_document, handle_qr};

/// ## Summary
/// POST /api/ical - Serialize the posted event form as an `.ics` download.
#[handler]
async fn download(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    handle_document(DocumentKind::ICalendar, req, depot, res).await;
}

/// ## Summary
/// POST /api/ical/qr - QR encode request and payload size for the posted
/// event form.
#[handler]
async fn qr(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    handle_qr(DocumentKind::ICalendar, req, depot, res).await;
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ICAL_ROUTE_COMPONENT)
        .post(download)
        .push(Router::with_path(QR_ROUTE_COMPONENT).post(qr))
}
