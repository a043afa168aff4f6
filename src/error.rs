//! Error types for the Filelink server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::links::LinkError;
use crate::stats::StatsError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::UnsupportedMedia(mime) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media",
                format!("Unsupported media type: {}", mime),
            ),
            AppError::Link(e) => (StatusCode::BAD_REQUEST, "link_error", e.to_string()),
            AppError::Stats(StatsError::SizeOverflow(size)) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                format!("File size {} is too large", size),
            ),
            AppError::Stats(e @ StatsError::CounterOverflow(_)) => {
                (StatusCode::BAD_REQUEST, "bad_request", e.to_string())
            }
            AppError::Stats(StatsError::Database(e)) | AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}
