//! Core use-case services.
//!
//! # Responsibility
//! - Implement directory use-cases on top of the record store contract.
//! - Derive read-only projections for callers.
//!
//! # Invariants
//! - Services are the only writers of the record store.

pub mod address_composer;
pub mod directory_service;
