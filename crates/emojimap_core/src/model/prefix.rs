//! Prefix derivation rule for the autocomplete index.
//!
//! # Responsibility
//! - Define the single, named rule that maps an entry name to its index key.
//!
//! # Invariants
//! - Prefixes are exactly [`PREFIX_CHARS`] characters, sliced on character
//!   boundaries, never bytes.
//! - Names shorter than [`PREFIX_CHARS`] are rejected, not truncated or
//!   padded.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of leading characters used as the autocomplete index key.
pub const PREFIX_CHARS: usize = 2;

/// Failure to derive an index prefix from an entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// The name has fewer than [`PREFIX_CHARS`] characters.
    NameTooShort { name: String, chars: usize },
}

impl Display for PrefixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { name, chars } => write!(
                f,
                "entry name `{name}` has {chars} character(s); at least {PREFIX_CHARS} required"
            ),
        }
    }
}

impl Error for PrefixError {}

/// Derives the index prefix from an entry name.
///
/// Returns the first [`PREFIX_CHARS`] characters of `name`, or
/// [`PrefixError::NameTooShort`] when the name cannot fill a prefix.
pub fn derive_prefix(name: &str) -> Result<String, PrefixError> {
    let prefix: String = name.chars().take(PREFIX_CHARS).collect();
    let chars = prefix.chars().count();
    if chars < PREFIX_CHARS {
        return Err(PrefixError::NameTooShort {
            name: name.to_string(),
            chars,
        });
    }
    Ok(prefix)
}
