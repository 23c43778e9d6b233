use thiserror::Error;

/// Service-level errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid form state: {0}")]
    InvalidFormState(String),

    #[error(transparent)]
    RfcError(#[from] qrcard_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] qrcard_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
