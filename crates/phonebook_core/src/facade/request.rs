//! Request schema.

use crate::service::directory_service::PhoneFilter;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One decoded operation with its typed arguments.
///
/// Wire shape: `{"operation": "<name>", ...arguments}`. Argument names outside
/// the operation's schema are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase", deny_unknown_fields)]
pub enum Request {
    // Empty struct variant so that stray arguments are checked too.
    PersonCount {},
    AllPersons {
        #[serde(default)]
        phone: Option<PhoneFilter>,
    },
    FindPerson {
        name: String,
    },
    AddPerson {
        name: String,
        #[serde(default)]
        phone: Option<String>,
        street: String,
        city: String,
    },
    EditNumber {
        name: String,
        phone: String,
    },
}

impl Request {
    /// Decodes a JSON request, rejecting unknown operations and mistyped arguments.
    pub fn from_json(raw: &str) -> Result<Self, RequestError> {
        serde_json::from_str(raw).map_err(|err| RequestError(err.to_string()))
    }

    /// Returns the wire name of the operation, used as the response data key.
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::PersonCount {} => "personCount",
            Self::AllPersons { .. } => "allPersons",
            Self::FindPerson { .. } => "findPerson",
            Self::AddPerson { .. } => "addPerson",
            Self::EditNumber { .. } => "editNumber",
        }
    }
}

/// Request failed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError(pub String);

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid request: {}", self.0)
    }
}

impl Error for RequestError {}
