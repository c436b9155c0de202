//! Route table for the JSON API.

use crate::handler;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;

/// Builds the axum router with all EmojiMap endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handler::health))
        .route("/api/v1/emojis", post(handler::create))
        .route("/api/v1/emojis/:name", get(handler::lookup))
        .route("/api/v1/suggest", get(handler::suggest))
        .with_state(state)
}
