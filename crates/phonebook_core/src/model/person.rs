//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical person record stored by the directory.
//! - Provide copy-on-write helpers for the only mutable field (`phone`).
//!
//! # Invariants
//! - `id` is generated once at creation and never reassigned.
//! - `phone: None` means "no phone"; it is never encoded as an empty string.
//! - Name uniqueness is a collection-level rule owned by the directory service.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to a person at creation time.
pub type PersonId = Uuid;

/// Validation errors for person construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    /// The nil UUID cannot identify a record.
    NilId,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "person id must not be the nil uuid"),
        }
    }
}

impl Error for PersonValidationError {}

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique within the store; compared case-sensitively.
    pub name: String,
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
    pub id: PersonId,
}

impl Person {
    /// Creates a person with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        phone: Option<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        // v4 ids always carry version bits, so they are never nil.
        Self::from_parts(Uuid::new_v4(), name, phone, street, city)
    }

    /// Creates a person with a caller-provided id.
    ///
    /// Used by seed/import paths where identity already exists.
    ///
    /// # Errors
    /// - `PersonValidationError::NilId` when `id` is the nil UUID.
    pub fn with_id(
        id: PersonId,
        name: impl Into<String>,
        phone: Option<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, PersonValidationError> {
        if id.is_nil() {
            return Err(PersonValidationError::NilId);
        }
        Ok(Self::from_parts(id, name, phone, street, city))
    }

    fn from_parts(
        id: PersonId,
        name: impl Into<String>,
        phone: Option<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone,
            street: street.into(),
            city: city.into(),
            id,
        }
    }

    /// Returns a copy of this record with only `phone` replaced.
    pub fn with_phone(&self, phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..self.clone()
        }
    }

    /// Returns whether a phone number is recorded.
    pub fn has_phone(&self) -> bool {
        self.phone.is_some()
    }
}
