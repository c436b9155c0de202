//! Request handlers for the JSON API.
//!
//! # Responsibility
//! - Translate HTTP requests into core service calls and service results
//!   into response bodies.
//!
//! # Invariants
//! - Handlers hold the store lock only for the duration of one service
//!   call; input normalization happens in the core services.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use emojimap_core::{Entry, IngestService, LookupService, SqliteEntryRepository};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LookupBody {
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedBody {
    pub status: &'static str,
    pub name: String,
}

/// Liveness probe reporting the core crate version.
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        version: emojimap_core::core_version(),
    })
}

/// Exact name lookup.
///
/// Multi-element symbol sequences are concatenated into one string for
/// display; a miss maps to a benign 404.
pub async fn lookup(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LookupBody>, ApiError> {
    let symbols = state.with_store(|conn| {
        LookupService::new(SqliteEntryRepository::new(conn)).exact(&name)
    })?;

    Ok(Json(LookupBody {
        name,
        symbol: symbols.concat(),
    }))
}

/// Prefix autocomplete query.
///
/// A missing or too-short `prefix` parameter yields an empty array, not an
/// error.
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.with_store(|conn| {
        LookupService::new(SqliteEntryRepository::new(conn)).suggestions(&params.prefix)
    })?;

    Ok(Json(names))
}

/// Single-entry insert; the request body shares the [`Entry`] shape.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Entry>,
) -> Result<(StatusCode, Json<CreatedBody>), ApiError> {
    let entry = state.with_store(|conn| {
        IngestService::new(SqliteEntryRepository::new(conn)).insert_one(body.name, body.symbol)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedBody {
            status: "created",
            name: entry.name,
        }),
    ))
}
