pub mod content;
pub mod ical;
pub mod payload;
pub mod vcard;
