//! Demo records loaded into a fresh directory.

use crate::model::person::{Person, PersonValidationError};
use uuid::Uuid;

/// Returns the demo persons with their fixed ids, in display order.
///
/// # Errors
/// - Propagates `Person::with_id` validation failures.
pub fn demo_persons() -> Result<Vec<Person>, PersonValidationError> {
    Ok(vec![
        Person::with_id(
            Uuid::from_u128(0x3d594650_3436_11e9_bc57_8b80ba54c431),
            "Juan Pablo",
            Some("999-1231543".to_string()),
            "Caimito Street",
            "Imus",
        )?,
        Person::with_id(
            Uuid::from_u128(0x3d599470_3436_11e9_bc57_8b80ba54c431),
            "Pedro Cruz",
            Some("919-2532342".to_string()),
            "Avocado Street",
            "Pasig",
        )?,
        Person::with_id(
            Uuid::from_u128(0x3d599471_3436_11e9_bc57_8b80ba54c431),
            "Micha Gagabo-an",
            None,
            "Adalla Street",
            "Makati",
        )?,
    ])
}
