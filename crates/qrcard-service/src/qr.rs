//! QR encode requests.
//!
//! Raster rendering happens outside this crate; the service only hands over
//! the payload text with the requested dimension and error-correction level.

use serde::Serialize;

use qrcard_core::config::QrConfig;
use qrcard_core::constants::{QR_MAX_SIZE, QR_MIN_SIZE};
use qrcard_core::types::ErrorCorrectionLevel;

use crate::form::FormState;
use crate::form::fields::qr;

/// Everything an external QR encoder needs to render one code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrEncodeRequest {
    /// Literal text to encode: the full serialized document.
    pub payload: String,
    /// Square image dimension in pixels, within `[128, 2048]`.
    pub size: u32,
    pub error_correction: ErrorCorrectionLevel,
}

impl QrEncodeRequest {
    #[must_use]
    pub fn new(payload: impl Into<String>, size: i64, error_correction: ErrorCorrectionLevel) -> Self {
        Self {
            payload: payload.into(),
            size: clamp_size(size),
            error_correction,
        }
    }

    /// Builds a request from the form's `size` and `ecl` fields, falling back
    /// to the configured defaults when either is missing or unparseable.
    #[must_use]
    pub fn from_form(payload: impl Into<String>, form: &FormState, defaults: &QrConfig) -> Self {
        let size = form
            .text(qr::SIZE)
            .parse::<i64>()
            .unwrap_or_else(|_| i64::from(defaults.default_size));

        let requested = form.text(qr::ERROR_CORRECTION);
        let error_correction = if requested.is_empty() {
            defaults.default_error_correction
        } else {
            requested.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Falling back to default error correction");
                defaults.default_error_correction
            })
        };

        Self::new(payload, size, error_correction)
    }
}

/// Clamps a requested pixel size into `[QR_MIN_SIZE, QR_MAX_SIZE]`.
#[must_use]
pub fn clamp_size(size: i64) -> u32 {
    let clamped = size.clamp(i64::from(QR_MIN_SIZE), i64::from(QR_MAX_SIZE));
    u32::try_from(clamped).unwrap_or(QR_MIN_SIZE)
}
