use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kind of document produced by a generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    VCard,
    ICalendar,
}

impl DocumentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VCard => "vcard",
            Self::ICalendar => "icalendar",
        }
    }

    /// Media type of the serialized document, without charset.
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::VCard => "text/vcard",
            Self::ICalendar => "text/calendar",
        }
    }

    /// File extension used when the document is persisted.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::VCard => "vcf",
            Self::ICalendar => "ics",
        }
    }

    /// Base filename used when the record supplies no usable name.
    #[must_use]
    pub const fn placeholder_name(self) -> &'static str {
        match self {
            Self::VCard => "Contact",
            Self::ICalendar => "Event",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// QR error-correction level, from lowest to highest redundancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrectionLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }
}

impl FromStr for ErrorCorrectionLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            other => Err(CoreError::InvalidInput(format!(
                "unknown error-correction level: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
