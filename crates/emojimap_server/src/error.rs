//! Server error taxonomy and HTTP response mapping.
//!
//! # Responsibility
//! - Separate fatal startup/runtime failures (`ServerError`) from
//!   per-request outcomes (`ApiError`).
//! - Map repository errors to status codes without leaking internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use emojimap_core::{DbError, RepoError};
use serde_json::json;
use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

/// Fatal failure during server startup or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store error: {0}")]
    Db(#[from] DbError),

    #[error("repository error: {0}")]
    Repo(#[from] RepoError),

    #[error("seed file `{path}`: {message}")]
    Seed { path: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}

/// Per-request error carrying a repository outcome.
///
/// Expected conditions (not found, duplicate, validation) keep a specific
/// user-facing signal; storage failures collapse to a generic 500 with the
/// detail logged server-side only.
#[derive(Debug)]
pub struct ApiError(RepoError);

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RepoError::NotFound(_) => (StatusCode::NOT_FOUND, "emoji not found".to_string()),
            RepoError::Duplicate(_) => (StatusCode::CONFLICT, "emoji already exists".to_string()),
            RepoError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RepoError::Prefix(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RepoError::Db(err) => {
                log::error!("event=request_failed module=server status=error error={err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
