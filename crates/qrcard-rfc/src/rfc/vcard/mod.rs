//! vCard contact serialization (RFC 6350).

pub mod build;
pub mod core;

pub use build::assemble;
pub use self::core::ContactRecord;
