//! Server configuration.
//!
//! # Responsibility
//! - Carry bind address, store location and logging settings from startup
//!   into the server.
//! - Apply `EMOJIMAP_*` environment overrides on top of defaults.

use crate::error::{ServerError, ServerResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    /// JSON seed source consumed once, when the store is empty.
    pub seed_path: Option<PathBuf>,
    /// Log file directory; stderr-only logging when unset.
    pub log_dir: Option<PathBuf>,
    /// Log level; build-mode default when unset.
    pub log_level: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".parse().expect("static default address"),
            db_path: PathBuf::from("emojimap.db"),
            seed_path: Some(PathBuf::from("assets/emojis.json")),
            log_dir: None,
            log_level: None,
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from defaults plus `EMOJIMAP_*` overrides.
    ///
    /// Recognized variables: `EMOJIMAP_BIND`, `EMOJIMAP_DB`, `EMOJIMAP_SEED`
    /// (empty value disables seeding), `EMOJIMAP_LOG_DIR`,
    /// `EMOJIMAP_LOG_LEVEL`.
    pub fn from_env() -> ServerResult<Self> {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var("EMOJIMAP_BIND") {
            config.bind_addr = parse_bind_addr(&bind)?;
        }
        if let Ok(db_path) = std::env::var("EMOJIMAP_DB") {
            config.db_path = PathBuf::from(db_path);
        }
        if let Ok(seed) = std::env::var("EMOJIMAP_SEED") {
            config.seed_path = if seed.is_empty() {
                None
            } else {
                Some(PathBuf::from(seed))
            };
        }
        if let Ok(log_dir) = std::env::var("EMOJIMAP_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(log_dir));
        }
        if let Ok(level) = std::env::var("EMOJIMAP_LOG_LEVEL") {
            config.log_level = Some(level);
        }

        Ok(config)
    }
}

fn parse_bind_addr(value: &str) -> ServerResult<SocketAddr> {
    value
        .parse()
        .map_err(|_| ServerError::Config(format!("invalid bind address `{value}`")))
}
