use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod buyers;
pub mod search;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller sent a malformed request; retrying without fixing the
    /// input will fail again.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A record references a buyer that does not exist. Indicates corrupted
    /// data; never silently emits a record with a missing buyer.
    #[error("record {record_id} references missing buyer {buyer_id}")]
    DataIntegrity { record_id: String, buyer_id: String },

    /// The storage engine failed or was unreachable; retryable by the caller.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Unavailable(err.to_string())
    }
}
