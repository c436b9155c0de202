//! Domain model for emoji name/symbol entries.
//!
//! # Responsibility
//! - Define the canonical entry record and its validation rules.
//! - Own the prefix-derivation rule used by the autocomplete index.
//!
//! # Invariants
//! - Entry names are unique case-insensitively at the store.
//! - Every stored entry name is long enough to derive its prefix.

pub mod entry;
pub mod prefix;
