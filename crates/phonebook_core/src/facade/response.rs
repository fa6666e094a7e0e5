//! Response envelope and person view.

use crate::model::address::Address;
use crate::model::person::{Person, PersonId};
use crate::service::address_composer::compose_address;
use serde::Serialize;
use serde_json::{Map, Value};

/// Person as returned to callers, with the composed address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonView {
    pub name: String,
    pub phone: Option<String>,
    pub address: Address,
    pub id: PersonId,
}

impl From<&Person> for PersonView {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            phone: person.phone.clone(),
            address: compose_address(person),
            id: person.id,
        }
    }
}

/// Stable machine-readable error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    BadUserInput,
    InternalServerError,
}

/// Structured error metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorExtensions {
    pub code: ErrorCode,
    #[serde(rename = "invalidArgs", skip_serializing_if = "Option::is_none")]
    pub invalid_args: Option<Value>,
}

/// One reported error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseError {
    pub message: String,
    pub extensions: ErrorExtensions,
}

/// Envelope returned for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

const ENCODE_FAILURE_JSON: &str = r#"{"errors":[{"message":"failed to encode response","extensions":{"code":"INTERNAL_SERVER_ERROR"}}]}"#;

impl Response {
    /// Successful response carrying `value` under the operation key.
    pub fn success(operation: &str, value: Value) -> Self {
        let mut data = Map::new();
        data.insert(operation.to_string(), value);
        Self {
            data: Some(Value::Object(data)),
            errors: Vec::new(),
        }
    }

    /// Failed response carrying one error.
    ///
    /// When the operation was decoded, its data key is kept with a `null`
    /// value; requests rejected before decoding carry no data at all.
    pub fn failure(operation: Option<&str>, error: ResponseError) -> Self {
        let data = operation.map(|operation| {
            let mut data = Map::new();
            data.insert(operation.to_string(), Value::Null);
            Value::Object(data)
        });
        Self {
            data,
            errors: vec![error],
        }
    }

    /// Returns the data value stored under `operation`, if any.
    pub fn value(&self, operation: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(operation))
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Encodes the envelope as one line of JSON.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| ENCODE_FAILURE_JSON.to_string())
    }
}
