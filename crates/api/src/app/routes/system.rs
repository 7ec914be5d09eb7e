use axum::http::StatusCode;

use crate::app::errors::ApiError;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Fallback for requests no route matched.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
