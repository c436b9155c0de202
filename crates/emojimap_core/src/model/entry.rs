//! Emoji entry domain model.
//!
//! # Responsibility
//! - Define the canonical name/symbol record.
//! - Provide field validation for write paths.
//!
//! # Invariants
//! - `name` is compared case-insensitively; `symbol` case is preserved
//!   exactly as given.
//! - Entries are never updated in place and never deleted in current scope.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical name/symbol association.
///
/// The same shape serves as the bulk seed record and the API request body,
/// so one storage model supports both ingestion paths without copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Lookup key. Unique case-insensitively across the store.
    pub name: String,
    /// One or more Unicode code points rendered for this name.
    pub symbol: String,
}

/// Field-level validation failure for an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyName,
    EmptySymbol,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "entry name must not be empty"),
            Self::EmptySymbol => write!(f, "entry symbol must not be empty"),
        }
    }
}

impl Error for EntryValidationError {}

impl Entry {
    /// Creates an entry from raw caller input.
    ///
    /// Construction does not validate; write paths call [`Entry::validate`]
    /// before any SQL mutation.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Checks that both fields carry content.
    ///
    /// Length and prefix rules are enforced separately by
    /// [`crate::model::prefix::derive_prefix`].
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.name.is_empty() {
            return Err(EntryValidationError::EmptyName);
        }
        if self.symbol.is_empty() {
            return Err(EntryValidationError::EmptySymbol);
        }
        Ok(())
    }
}
