//! Error types for txboard-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use txboard_core::CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Internal server error: {message}")]
    InternalError { message: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidPageSize { .. } => ApiError::BadRequest {
                message: error.to_string(),
            },
            other => ApiError::InternalError {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
