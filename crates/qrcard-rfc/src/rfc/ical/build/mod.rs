//! iCalendar document assembly.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use qrcard_rfc::rfc::ical::{EventRecord, GenerationContext, assemble};
//!
//! let record = EventRecord {
//!     title: "Team Sync".to_string(),
//!     start_date: "2024-03-15".to_string(),
//!     ..EventRecord::default()
//! };
//! let context = GenerationContext::new("event-1@example.com", Utc::now());
//!
//! let document = assemble(&record, &context);
//! assert!(document.as_str().contains("DTSTART;VALUE=DATE:20240315\r\n"));
//! ```

mod context;
mod serializer;

pub use context::GenerationContext;
pub use serializer::{EVENT_TITLE_REQUIRED, START_DATE_REQUIRED, assemble, placeholder};
