//! Address projection.

use serde::{Deserialize, Serialize};

/// Structured address view derived from a person's flat `street`/`city` fields.
///
/// Has no identity or lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
}
