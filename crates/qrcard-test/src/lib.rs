//! qrcard payload generator - integration test support.
//!
//! Re-exports the workspace crates so integration tests can reach every
//! layer through one dependency.

pub use qrcard_app;
pub use qrcard_core;
pub use qrcard_rfc;
pub use qrcard_service;

/// Base URL used by integration tests; the host is never contacted.
pub const TEST_ORIGIN: &str = "http://127.0.0.1:8698";
