pub mod api;

use salvo::Router;
use salvo::logging::Logger;

use crate::config::{ConfigHandler, Settings};

/// ## Summary
/// Builds the full application router: request logging, configuration
/// injection and the API routes.
#[must_use]
pub fn router(settings: Settings) -> Router {
    Router::new()
        .hoop(Logger::new())
        .hoop(ConfigHandler { settings })
        .push(api::routes())
}
