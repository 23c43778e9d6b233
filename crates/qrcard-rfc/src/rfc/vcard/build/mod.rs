//! vCard document assembly.
//!
//! ## Usage
//!
//! ```rust
//! use qrcard_rfc::rfc::vcard::{ContactRecord, assemble};
//!
//! let record = ContactRecord {
//!     name: "Ada Lovelace".to_string(),
//!     email: "ada@example.com".to_string(),
//!     ..ContactRecord::default()
//! };
//!
//! let document = assemble(&record);
//! assert!(document.as_str().starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\n"));
//! ```

mod serializer;

pub use serializer::{VCARD_VERSION, assemble};
