// Common types and utilities for API handlers

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::response::{STATUS_ERROR, STATUS_SUCCESS};
use crate::errors::{ErrorKind, StoreError};

// Helper type for API responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ErrorResponse>)>;

/// Success envelope: `data` rows are positional, `keys` names their columns
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub keys: &'static [&'static str],
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(keys: &'static [&'static str], data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            keys,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: STATUS_ERROR,
            message,
        }
    }
}

// Query parameters
#[derive(Debug, Deserialize)]
pub struct SnapshotsQuery {
    pub before: Option<String>,
    pub limit: Option<String>,
}

/// Logs `err` and converts it to the client-facing error response.
///
/// Unexpected errors are logged in full; the client only sees the generic
/// message.
pub fn error_response(context: &str, err: &StoreError) -> (StatusCode, Json<ErrorResponse>) {
    match err.kind() {
        ErrorKind::Unexpected => error!("{}: {}", context, err),
        ErrorKind::BadRequest | ErrorKind::NotFound => info!("{}: {:?}", context, err),
    }

    (
        err.status_code(),
        Json(ErrorResponse::new(err.public_message())),
    )
}
