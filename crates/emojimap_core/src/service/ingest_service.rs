//! Write-path service: single insert and ordered bulk seed.
//!
//! # Responsibility
//! - Funnel both ingestion paths through the same validated, transactional
//!   repository insert.
//!
//! # Invariants
//! - Seed processing follows input order; the first failure aborts the
//!   remaining batch and is surfaced unchanged.

use crate::model::entry::Entry;
use crate::repo::entry_repo::{EntryRepository, RepoResult};
use log::info;

/// Use-case service for the write path.
pub struct IngestService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> IngestService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a single name/symbol pair.
    ///
    /// # Contract
    /// - Empty fields surface as `RepoError::Validation`.
    /// - A case-insensitive name collision surfaces as
    ///   `RepoError::Duplicate` so callers can report "already exists".
    /// - Returns the stored entry on success.
    pub fn insert_one(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> RepoResult<Entry> {
        let entry = Entry::new(name, symbol);
        self.repo.insert_entry(&entry)?;
        Ok(entry)
    }

    /// Inserts an ordered batch of entries through the single-insert path.
    ///
    /// Entries inserted before a failure remain stored; the batch is not
    /// wrapped in an outer transaction.
    pub fn seed_entries(&self, entries: &[Entry]) -> RepoResult<usize> {
        for entry in entries {
            self.repo.insert_entry(entry)?;
        }

        info!(
            "event=seed module=service status=ok count={}",
            entries.len()
        );
        Ok(entries.len())
    }
}
