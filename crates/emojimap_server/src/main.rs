//! Server binary: config, logging, store bootstrap, seed, serve.

use emojimap_core::{default_log_level, init_logging, open_db};
use emojimap_server::{build_router, seed, AppState, ServerConfig, ServerError, ServerResult};
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = ServerConfig::from_env()?;

    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, config.log_dir.as_deref()).map_err(ServerError::Logging)?;

    let conn = open_db(&config.db_path)?;
    if let Some(seed_path) = &config.seed_path {
        seed::seed_if_empty(&conn, seed_path)?;
    }

    let app = build_router(AppState::new(conn));
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_start module=server status=ok addr={}",
        config.bind_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
