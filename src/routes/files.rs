//! File link routes
//!
//! Endpoints:
//! - POST /api/v1/files - Process a forwarded file, return its link
//! - GET /api/v1/files/verify - Check a token against file metadata

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::events::{is_supported, FileEvent, ProcessedFile};
use crate::links::FileMetadata;
use crate::state::AppState;

/// Create the files router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(process_file))
        .route("/verify", get(verify_token))
}

/// POST /api/v1/files
async fn process_file(
    State(state): State<AppState>,
    Json(event): Json<FileEvent>,
) -> Result<(StatusCode, Json<ProcessedFile>)> {
    if !is_supported(&event.mime_type) {
        return Err(AppError::UnsupportedMedia(event.mime_type));
    }

    let processed = state.processor().process(&event).await?;
    Ok((StatusCode::CREATED, Json(processed)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyQuery {
    message_id: i64,
    token: String,
    file_id: i64,
    #[serde(default)]
    file_name: String,
    file_size: u64,
    #[serde(default)]
    mime_type: String,
}

impl VerifyQuery {
    fn metadata(&self) -> FileMetadata {
        FileMetadata::new(
            self.file_id,
            self.file_name.as_str(),
            self.file_size,
            self.mime_type.as_str(),
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

/// GET /api/v1/files/verify
///
/// The tamper check the resolver performs: recompute the token from the
/// stored metadata and compare it with the one in the link.
async fn verify_token(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Result<Json<VerifyResponse>> {
    let issuer = state.issuer();
    let metadata = query.metadata();
    let valid = issuer.verify(&metadata, &query.token);

    let url = if valid {
        Some(issuer.url_for(query.message_id, &issuer.token_for(&metadata))?)
    } else {
        tracing::debug!(message_id = query.message_id, "Token mismatch");
        None
    };

    Ok(Json(VerifyResponse { valid, url }))
}
