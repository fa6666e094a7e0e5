//! Person store contract and the in-memory implementation.
//!
//! # Responsibility
//! - Keep persons in insertion order.
//! - Hand out immutable snapshots to readers.
//! - Run read-modify-replace updates under a single writer.
//!
//! # Invariants
//! - Readers never observe a partially applied update.
//! - The update closure sees the collection that its replacement swaps out,
//!   so check-then-act sequences inside one closure are atomic.

use crate::model::person::Person;
use std::sync::{Arc, PoisonError, RwLock};

/// Immutable view of the whole collection at one point in time.
pub type PersonSnapshot = Arc<Vec<Person>>;

/// Outcome of a `replace_with` update closure.
#[derive(Debug)]
pub enum StoreUpdate<T> {
    /// Swap in the given collection, then return the value.
    Replace(Vec<Person>, T),
    /// Keep the current collection, return the value.
    Unchanged(T),
}

/// Storage contract used by the directory service.
pub trait PersonStore {
    /// Returns the current collection.
    fn snapshot(&self) -> PersonSnapshot;

    /// Applies `update` to the current collection while holding the writer slot.
    fn replace_with<T, F>(&self, update: F) -> T
    where
        F: FnOnce(&[Person]) -> StoreUpdate<T>;

    /// Returns the number of stored persons.
    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Copy-on-write in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    persons: RwLock<PersonSnapshot>,
}

impl InMemoryPersonStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `persons` in the given order.
    ///
    /// Callers are responsible for passing names that are already unique.
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(Arc::new(persons)),
        }
    }
}

impl PersonStore for InMemoryPersonStore {
    fn snapshot(&self) -> PersonSnapshot {
        // Poisoning is recoverable: the guarded value is only ever swapped
        // whole, after the replacement has been fully built.
        let guard = self.persons.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    fn replace_with<T, F>(&self, update: F) -> T
    where
        F: FnOnce(&[Person]) -> StoreUpdate<T>,
    {
        let mut guard = self.persons.write().unwrap_or_else(PoisonError::into_inner);
        match update(guard.as_slice()) {
            StoreUpdate::Replace(next, value) => {
                *guard = Arc::new(next);
                value
            }
            StoreUpdate::Unchanged(value) => value,
        }
    }
}
