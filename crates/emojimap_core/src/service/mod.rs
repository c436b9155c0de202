//! Use-case services over the entry repository.
//!
//! # Responsibility
//! - Expose the read path (exact lookup, suggestions) and the write path
//!   (single insert, bulk seed) as stable entry points for callers.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic.

pub mod ingest_service;
pub mod lookup_service;
