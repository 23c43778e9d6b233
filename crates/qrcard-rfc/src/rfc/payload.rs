//! Payload size measurement against the QR compatibility budget.

use serde::Serialize;

use super::content::SerializedDocument;

/// Advisory classification of a payload's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadStatus {
    Ok,
    Warn,
}

impl PayloadStatus {
    /// `Warn` when `bytes` strictly exceeds `threshold`.
    #[must_use]
    pub const fn classify(bytes: usize, threshold: usize) -> Self {
        if bytes > threshold { Self::Warn } else { Self::Ok }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
        }
    }
}

/// UTF-8 byte length of a payload and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayloadSizeReport {
    pub bytes: usize,
    pub status: PayloadStatus,
}

impl PayloadSizeReport {
    /// Measures `payload` by encoded byte count, not character count.
    #[must_use]
    pub const fn measure(payload: &str, threshold: usize) -> Self {
        let bytes = payload.len();
        Self {
            bytes,
            status: PayloadStatus::classify(bytes, threshold),
        }
    }

    #[must_use]
    pub fn for_document(document: &SerializedDocument, threshold: usize) -> Self {
        let report = Self::measure(document.as_str(), threshold);
        if report.status == PayloadStatus::Warn {
            tracing::debug!(
                bytes = report.bytes,
                threshold,
                kind = %document.kind(),
                "Payload exceeds compatibility threshold"
            );
        }
        report
    }
}
