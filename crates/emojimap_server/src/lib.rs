//! HTTP surface for EmojiMap.
//!
//! Exposes the core lookup and ingestion services as a JSON API: exact
//! name lookup, prefix autocomplete and single-entry registration, plus a
//! health probe. Startup concerns (config, logging, store bootstrap,
//! seeding) live in the binary; this library owns the router and handlers
//! so tests can drive them in-process.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod seed;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use emojimap_core::db::open_db_in_memory;
    use emojimap_core::{Entry, IngestService, SqliteEntryRepository};
    use tower::util::ServiceExt;

    fn seeded_state() -> AppState {
        let conn = open_db_in_memory().unwrap();
        IngestService::new(SqliteEntryRepository::new(&conn))
            .seed_entries(&[Entry::new("rocket", "🚀"), Entry::new("robot", "🤖")])
            .unwrap();
        AppState::new(conn)
    }

    async fn body_string(body: Body) -> String {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = build_router(seeded_state());
        let response = app.oneshot(get("/api/v1/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response.into_body()).await;
        assert!(body.contains("\"ok\""));
    }

    #[tokio::test]
    async fn lookup_known_name() {
        let app = build_router(seeded_state());
        let response = app.oneshot(get("/api/v1/emojis/ROCKET")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response.into_body()).await;
        assert!(body.contains("🚀"));
    }

    #[tokio::test]
    async fn lookup_unknown_name_is_benign_404() {
        let app = build_router(seeded_state());
        let response = app.oneshot(get("/api/v1/emojis/unknown")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_string(response.into_body()).await;
        assert!(body.contains("emoji not found"));
    }

    #[tokio::test]
    async fn suggest_returns_matching_names() {
        let app = build_router(seeded_state());
        let response = app.oneshot(get("/api/v1/suggest?prefix=ro")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response.into_body()).await;
        assert!(body.contains("rocket"));
        assert!(body.contains("robot"));
    }

    #[tokio::test]
    async fn suggest_with_short_or_missing_prefix_is_empty_array() {
        let app = build_router(seeded_state());
        let response = app
            .clone()
            .oneshot(get("/api/v1/suggest?prefix=r"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response.into_body()).await, "[]");

        let response = app.oneshot(get("/api/v1/suggest")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response.into_body()).await, "[]");
    }

    #[tokio::test]
    async fn create_new_entry() {
        let app = build_router(seeded_state());
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/emojis",
                r#"{"name":"rose","symbol":"🌹"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(get("/api/v1/emojis/rose")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_duplicate_is_conflict() {
        let app = build_router(seeded_state());
        let response = app
            .oneshot(post_json(
                "/api/v1/emojis",
                r#"{"name":"Rocket","symbol":"🚀"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_string(response.into_body()).await;
        assert!(body.contains("already exists"));
    }

    #[tokio::test]
    async fn create_with_empty_field_is_bad_request() {
        let app = build_router(seeded_state());
        let response = app
            .oneshot(post_json("/api/v1/emojis", r#"{"name":"rose","symbol":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_one_character_name_is_bad_request() {
        let app = build_router(seeded_state());
        let response = app
            .oneshot(post_json("/api/v1/emojis", r#"{"name":"a","symbol":"🅰️"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
