// Response shaping for requests that never reach a handler

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use std::any::Any;

use crate::api::errors::ApiError;

/// Fallback for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Replaces the router's bare 405 with the JSON error body
pub async fn method_not_allowed_json(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        return ApiError::method_not_allowed().into_response();
    }
    response
}

/// Turns a handler panic into the JSON 500 body
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "handler panicked");

    ApiError::internal_server_error().into_response()
}
