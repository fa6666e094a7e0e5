//! Record store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold the authoritative, ordered person collection.
//! - Offer atomic snapshot reads and atomic whole-collection replacement.
//!
//! # Invariants
//! - The store performs no validation; business rules live in services.
//! - A replacement is either fully visible or not visible at all.

pub mod person_store;
pub mod seed;
