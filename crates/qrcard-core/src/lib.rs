//! Shared configuration, constants and types for the qrcard workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
