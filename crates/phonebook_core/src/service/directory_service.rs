//! Directory use-case service.
//!
//! # Responsibility
//! - Provide count/list/find/add/edit-number entry points.
//! - Own name uniqueness and phone-filter semantics.
//!
//! # Invariants
//! - No two stored persons share a `name` (case-sensitive exact match).
//! - Duplicate check and insert run inside one store update.
//! - "Not found" is `None`, never an error.
//! - Name lookups are linear scans, O(n) per call.

use crate::model::person::Person;
use crate::repo::person_store::{PersonStore, StoreUpdate};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Business-rule failures raised by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A person with this name already exists.
    DuplicateName { name: String },
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName { .. } => write!(f, "Name must be unique"),
        }
    }
}

impl Error for DirectoryError {}

/// Phone-presence filter for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneFilter {
    /// Only persons with a phone number.
    #[serde(rename = "YES", alias = "HAS_PHONE")]
    HasPhone,
    /// Only persons without a phone number.
    #[serde(rename = "NO", alias = "NO_PHONE")]
    NoPhone,
}

impl PhoneFilter {
    /// Returns whether `person` passes this filter.
    pub fn matches(self, person: &Person) -> bool {
        match self {
            Self::HasPhone => person.has_phone(),
            Self::NoPhone => !person.has_phone(),
        }
    }
}

/// Request model for adding a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonRequest {
    pub name: String,
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
}

/// Directory service over a person store.
pub struct DirectoryService<S: PersonStore> {
    store: S,
}

impl<S: PersonStore> DirectoryService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the number of stored persons.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Lists persons in store order, optionally filtered by phone presence.
    ///
    /// # Contract
    /// - `None` returns every person.
    /// - `HasPhone` and `NoPhone` partition the unfiltered result.
    pub fn list(&self, filter: Option<PhoneFilter>) -> Vec<Person> {
        let snapshot = self.store.snapshot();
        let persons: Vec<Person> = match filter {
            None => snapshot.to_vec(),
            Some(filter) => snapshot
                .iter()
                .filter(|person| filter.matches(person))
                .cloned()
                .collect(),
        };
        debug!(
            "event=person_list module=directory status=ok filter={:?} result_count={}",
            filter,
            persons.len()
        );
        persons
    }

    /// Finds a person by exact name.
    pub fn find(&self, name: &str) -> Option<Person> {
        self.store
            .snapshot()
            .iter()
            .find(|person| person.name == name)
            .cloned()
    }

    /// Adds a person with a freshly generated id.
    ///
    /// # Contract
    /// - Fails with `DirectoryError::DuplicateName` when the name is taken;
    ///   the store is left unchanged in that case.
    /// - Returns the whole stored record.
    pub fn add(&self, request: AddPersonRequest) -> DirectoryResult<Person> {
        let result = self.store.replace_with(|current| {
            if current.iter().any(|person| person.name == request.name) {
                return StoreUpdate::Unchanged(Err(DirectoryError::DuplicateName {
                    name: request.name,
                }));
            }

            let person = Person::new(request.name, request.phone, request.street, request.city);
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend_from_slice(current);
            next.push(person.clone());
            StoreUpdate::Replace(next, Ok(person))
        });

        match &result {
            Ok(person) => info!(
                "event=person_add module=directory status=ok id={} has_phone={}",
                person.id,
                person.has_phone()
            ),
            Err(DirectoryError::DuplicateName { name }) => warn!(
                "event=person_add module=directory status=rejected error_code=duplicate_name name_len={}",
                name.chars().count()
            ),
        }
        result
    }

    /// Replaces the phone number of the person named `name`.
    ///
    /// # Contract
    /// - Returns `None` and leaves the store unchanged for unknown names.
    /// - The updated record keeps its position, id and other fields.
    pub fn edit_number(&self, name: &str, phone: impl Into<String>) -> Option<Person> {
        let phone = phone.into();
        let updated = self.store.replace_with(|current| {
            let Some(index) = current.iter().position(|person| person.name == name) else {
                return StoreUpdate::Unchanged(None);
            };

            let updated = current[index].with_phone(phone);
            let mut next = current.to_vec();
            next[index] = updated.clone();
            StoreUpdate::Replace(next, Some(updated))
        });

        match &updated {
            Some(person) => info!(
                "event=person_edit_number module=directory status=ok id={}",
                person.id
            ),
            None => info!("event=person_edit_number module=directory status=not_found"),
        }
        updated
    }
}
