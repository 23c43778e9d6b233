use thiserror::Error;

/// RFC serialization errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    CoreError(#[from] qrcard_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
