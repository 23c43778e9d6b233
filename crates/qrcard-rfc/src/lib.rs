//! RFC 6350 (vCard) and RFC 5545 (iCalendar) document serialization for
//! QR payloads.

pub mod error;
pub mod rfc;
