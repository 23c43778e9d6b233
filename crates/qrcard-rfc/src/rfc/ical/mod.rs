//! iCalendar event serialization (RFC 5545).
//!
//! Produces a single `VEVENT` inside a `VCALENDAR`, or a placeholder document
//! naming the missing required field.

pub mod build;
pub mod core;

pub use build::{EVENT_TITLE_REQUIRED, GenerationContext, START_DATE_REQUIRED, assemble};
pub use self::core::{EventRecord, Schedule};
