use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::AuthError;
use crate::domain::repositories::RepositoryError;

pub const NOT_FOUND_MESSAGE: &str = "resource not found";
pub const UNPROCESSABLE_MESSAGE: &str = "unprocessable";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// API error type with HTTP status code and message
///
/// Every failure leaves the service as
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 404 Not Found error
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// Creates a 405 Method Not Allowed error
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
    }

    /// Creates a 422 Unprocessable Entity error
    pub fn unprocessable() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, UNPROCESSABLE_MESSAGE)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    /// Translates a failed write on a mutation route
    ///
    /// Anything the store refuses is reported as unprocessable input, except
    /// a record that disappeared, which stays a 404.
    pub fn from_write(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::not_found(),
            other => {
                tracing::warn!(error = %other, "store rejected write");
                Self::unprocessable()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.status.as_u16(),
            "message": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::not_found(),
            other => {
                tracing::error!(error = %other, "repository failure");
                Self::internal_server_error()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::warn!(code = err.code, status = %err.status, "authorization failed");
        Self::new(err.status, err.description)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(reason = %rejection.body_text(), "rejected request body");
        Self::unprocessable()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "path did not match");
        Self::not_found()
    }
}
