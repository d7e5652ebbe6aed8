use thiserror::Error;

/// Failure reported by the external service collaborator.
///
/// The boundary is opaque by contract: it does not distinguish transient
/// network trouble from terminal business rejection, so neither does this
/// type. A production integration would grow that taxonomy here.
#[derive(Debug, Clone, Error)]
#[error("service call failed: {message}")]
pub struct ServiceError {
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
