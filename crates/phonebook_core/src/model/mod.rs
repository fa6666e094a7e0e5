//! Domain model for the person directory.
//!
//! # Responsibility
//! - Define the canonical person record held by the record store.
//! - Define read-only projections derived from stored records.
//!
//! # Invariants
//! - Every person is identified by a stable, non-nil `PersonId`.
//! - Projections (`Address`) are computed on demand and never stored.

pub mod address;
pub mod person;
