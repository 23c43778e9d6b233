//! Form collection and the generate pipeline: form state in, serialized
//! document, payload report and QR encode request out.

pub mod error;
pub mod form;
pub mod generate;
pub mod qr;
