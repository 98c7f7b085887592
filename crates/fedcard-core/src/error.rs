use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Failures reported by a storage backend, user directory or random source.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("User directory error: {0}")]
    Directory(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;
