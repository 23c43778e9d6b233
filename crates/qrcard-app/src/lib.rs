//! HTTP surface for the vCard / iCalendar QR payload generator.

pub mod app;
pub mod config;
pub mod error;
