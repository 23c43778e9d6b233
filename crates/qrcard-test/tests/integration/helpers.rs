#![allow(clippy::expect_used)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating the Salvo service under test
//! - Posting form snapshots
//! - Splitting CRLF documents into lines

use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use qrcard_test::TEST_ORIGIN;
use qrcard_test::qrcard_app::app::router;
use qrcard_test::qrcard_core::config::Settings;

/// Creates the application service with default settings.
#[must_use]
pub fn create_test_service() -> Service {
    create_test_service_with(default_settings())
}

/// Default settings, for tests that adjust a few fields before building a
/// service.
#[must_use]
pub fn default_settings() -> Settings {
    Settings::with_defaults().expect("default settings")
}

/// Creates the application service with custom settings.
#[must_use]
pub fn create_test_service_with(settings: Settings) -> Service {
    Service::new(router(settings))
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}",
            self.status
        );
    }

    /// Asserts that a header exists with the expected value.
    pub fn assert_header(&self, name: &str, expected: &str) {
        let found = self
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name));
        assert!(found.is_some(), "Header '{name}' not found in response");
        let (_, value) = found.expect("Header should exist");
        assert_eq!(
            value, expected,
            "Header '{name}' expected '{expected}' but got '{value}'"
        );
    }

    /// Document lines without their CRLF terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.body
            .strip_suffix("\r\n")
            .unwrap_or(&self.body)
            .split("\r\n")
            .collect()
    }

    /// Lines starting with `prefix`.
    #[must_use]
    pub fn lines_starting_with(&self, prefix: &str) -> Vec<&str> {
        self.lines()
            .into_iter()
            .filter(|l| l.starts_with(prefix))
            .collect()
    }

    /// Parses the body as JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("JSON response body")
    }
}

/// Posts `form` (a JSON object) to `path` and collects the response.
pub async fn post_form(service: &Service, path: &str, form: &serde_json::Value) -> TestResponse {
    tracing::debug!(path, "Posting form snapshot");
    let mut resp = TestClient::post(format!("{TEST_ORIGIN}{path}"))
        .json(form)
        .send(service)
        .await;

    let headers = resp
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
        .collect();

    TestResponse {
        status: resp.status_code.unwrap_or(StatusCode::OK),
        headers,
        body: resp.take_string().await.unwrap_or_default(),
    }
}
