//! Persistence layer for emoji entries.
//!
//! # Responsibility
//! - Define repository contracts used by core business logic.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - An entry row and its prefix row are written in one transaction; no
//!   reader observes one without the other.

pub mod entry_repo;
