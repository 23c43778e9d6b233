use chrono::{DateTime, Utc};

use qrcard_core::constants::{DEFAULT_PRODUCT_ID, DEFAULT_TIMEZONE};

/// Per-call values the assembler would otherwise read from the clock or an
/// RNG. Two calls with equal records and equal contexts produce byte-identical
/// documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    /// Globally unique event identifier.
    pub uid: String,
    /// Generation instant, emitted as DTSTAMP.
    pub stamp: DateTime<Utc>,
    pub product_id: String,
    /// TZID for timed events whose record names no timezone.
    pub default_timezone: String,
}

impl GenerationContext {
    #[must_use]
    pub fn new(uid: impl Into<String>, stamp: DateTime<Utc>) -> Self {
        Self {
            uid: uid.into(),
            stamp,
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    #[must_use]
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = product_id.into();
        self
    }

    #[must_use]
    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = timezone.into();
        self
    }
}
