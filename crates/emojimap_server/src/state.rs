//! Shared application state for request handlers.
//!
//! # Responsibility
//! - Own the single store connection constructed at startup and hand it to
//!   handlers by explicit reference, never through globals.
//!
//! # Invariants
//! - All store access goes through the mutex; the lock is the critical
//!   section that serializes concurrent writes around the put-and-index
//!   pair.
//! - The lock is never held across an await point.

use rusqlite::Connection;
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable handle to the shared entry store.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a bootstrapped connection for sharing across requests.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `f` with exclusive access to the store connection.
    pub fn with_store<T>(&self, f: impl FnOnce(&Connection) -> T) -> T {
        // A poisoned lock only means another request panicked mid-read;
        // the connection itself stays usable.
        let guard = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}
