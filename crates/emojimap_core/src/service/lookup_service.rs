//! Read-path service: exact lookup and prefix suggestions.
//!
//! # Responsibility
//! - Normalize caller input before it reaches the store.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Inputs are lowercased once, here; the store compares case-insensitively.
//! - Suggestion queries never reach the store with fewer input characters
//!   than the index key length.

use crate::model::prefix::derive_prefix;
use crate::repo::entry_repo::{EntryRepository, RepoResult};

/// Use-case service for the read path.
pub struct LookupService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> LookupService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks up the symbols stored under `name`, case-insensitively.
    ///
    /// # Contract
    /// - `RepoError::NotFound` is an expected, benign outcome for callers,
    ///   distinct from storage failures.
    pub fn exact(&self, name: &str) -> RepoResult<Vec<String>> {
        let normalized = name.to_lowercase();
        self.repo.symbols_by_name(&normalized)
    }

    /// Returns entry names matching the leading characters of `input`.
    ///
    /// # Contract
    /// - Inputs shorter than [`crate::model::prefix::PREFIX_CHARS`] return
    ///   an empty list without touching the store.
    /// - Longer inputs are truncated to the index key length.
    pub fn suggestions(&self, input: &str) -> RepoResult<Vec<String>> {
        let normalized = input.to_lowercase();
        let Ok(key) = derive_prefix(&normalized) else {
            return Ok(Vec::new());
        };
        self.repo.names_with_prefix(&key)
    }
}
