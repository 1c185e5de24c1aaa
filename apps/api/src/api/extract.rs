// Request extractors that reject with the service's JSON error shape

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use crate::api::errors::ApiError;

/// JSON body extractor; malformed or mistyped bodies become 422
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor; ids that do not parse become 404
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `?page=N` query parameter
///
/// A missing or non-numeric value falls back to the first page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(1)
    }
}
