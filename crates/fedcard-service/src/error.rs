use fedcard_core::error::BackendError;
use fedcard_rfc::error::RfcError;
use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Failed to decode card {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: RfcError,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ServiceError {
    /// Whether the error indicates a fault on our side rather than in the request.
    #[must_use]
    pub const fn is_server_fault(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::Backend(_) | Self::InvalidConfiguration(_)
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
