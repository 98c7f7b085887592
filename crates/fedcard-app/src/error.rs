use fedcard_core::error::CoreError;
use fedcard_service::error::ServiceError;
use salvo::{
    Response,
    http::StatusCode,
    writing::{Json, Scribe},
};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) => match err {
                ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ServiceError::UserNotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::NotAuthenticated => StatusCode::UNAUTHORIZED,
                ServiceError::Decode { .. }
                | ServiceError::Backend(_)
                | ServiceError::InvalidConfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// The message sent to the client. Server faults are not described.
    #[must_use]
    pub fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl Scribe for AppError {
    fn render(self, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: self.client_message(),
        }));
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
