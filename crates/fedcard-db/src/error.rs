use fedcard_core::error::BackendError;
use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error("Connection error: {0}")]
    ConnectionError(#[from] diesel::ConnectionError),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type DbResult<T> = std::result::Result<T, DbError>;

impl From<DbError> for BackendError {
    fn from(err: DbError) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match err {
            DbError::DatabaseError(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                info,
            )) => Self::Conflict(info.message().to_string()),
            unavailable @ (DbError::PoolError(_) | DbError::ConnectionError(_)) => {
                Self::Unavailable(unavailable.to_string())
            }
            other => Self::Storage(other.to_string()),
        }
    }
}
