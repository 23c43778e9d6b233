mod app_specific;
mod document;

use salvo::Router;

// Re-export route constants from core
pub use qrcard_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, ICAL_ROUTE_COMPONENT, ICAL_ROUTE_PREFIX,
    QR_ROUTE_COMPONENT, VCARD_ROUTE_COMPONENT, VCARD_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router with the document and QR handlers.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(document::vcard::routes())
        .push(document::ical::routes())
}
