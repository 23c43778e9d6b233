use salvo::{Depot, Request, Response, Router, handler};

use qrcard_core::constants::{QR_ROUTE_COMPONENT, VCARD_ROUTE_COMPONENT};
use qrcard_core::types::DocumentKind;

use super::{handle_document, handle_qr};

/// ## Summary
/// POST /api/vcard - Serialize the posted contact form as a `.vcf` download.
#[handler]
async fn download(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    handle_document(DocumentKind::VCard, req, depot, res).await;
}

/// ## Summary
/// POST /api/vcard/qr - QR encode request and payload size for the posted
/// contact form.
#[handler]
async fn qr(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    handle_qr(DocumentKind::VCard, req, depot, res).await;
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(VCARD_ROUTE_COMPONENT)
        .post(download)
        .push(Router::with_path(QR_ROUTE_COMPONENT).post(qr))
}
