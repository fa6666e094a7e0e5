//! Request dispatch into the directory service.
//!
//! # Invariants
//! - Every request yields exactly one `Response`; this layer never panics
//!   on caller input.
//! - Business-rule errors carry the offending value in `invalidArgs`.

use crate::config::DirectoryConfig;
use crate::facade::request::{Request, RequestError};
use crate::facade::response::{ErrorCode, ErrorExtensions, PersonView, Response, ResponseError};
use crate::model::person::PersonValidationError;
use crate::repo::person_store::{InMemoryPersonStore, PersonStore};
use crate::repo::seed::demo_persons;
use crate::service::directory_service::{AddPersonRequest, DirectoryError, DirectoryService};
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Failure raised while serving one request.
#[derive(Debug)]
pub enum FacadeError {
    /// Request did not match the schema.
    Validation(RequestError),
    /// Directory rejected the operation.
    Directory(DirectoryError),
    /// Result could not be encoded.
    Encode(serde_json::Error),
}

impl Display for FacadeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Directory(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode result: {err}"),
        }
    }
}

impl Error for FacadeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Directory(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RequestError> for FacadeError {
    fn from(value: RequestError) -> Self {
        Self::Validation(value)
    }
}

impl From<DirectoryError> for FacadeError {
    fn from(value: DirectoryError) -> Self {
        Self::Directory(value)
    }
}

impl From<serde_json::Error> for FacadeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl FacadeError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Directory(DirectoryError::DuplicateName { .. }) => ErrorCode::BadUserInput,
            Self::Encode(_) => ErrorCode::InternalServerError,
        }
    }

    fn error_code_label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::Directory(DirectoryError::DuplicateName { .. }) => "duplicate_name",
            Self::Encode(_) => "encode_failed",
        }
    }
}

impl From<&FacadeError> for ResponseError {
    fn from(err: &FacadeError) -> Self {
        let invalid_args = match err {
            FacadeError::Directory(DirectoryError::DuplicateName { name }) => {
                Some(Value::String(name.clone()))
            }
            _ => None,
        };
        Self {
            message: err.to_string(),
            extensions: ErrorExtensions {
                code: err.code(),
                invalid_args,
            },
        }
    }
}

/// Query/mutation entry point.
pub struct QueryFacade<S: PersonStore> {
    directory: DirectoryService<S>,
}

impl QueryFacade<InMemoryPersonStore> {
    /// Builds a facade over a fresh in-memory store, seeded per `config`.
    ///
    /// # Errors
    /// - Returns seed validation failures unchanged.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, PersonValidationError> {
        let store = if config.seed_demo_data {
            InMemoryPersonStore::with_persons(demo_persons()?)
        } else {
            InMemoryPersonStore::new()
        };
        Ok(Self::new(DirectoryService::new(store)))
    }
}

impl<S: PersonStore> QueryFacade<S> {
    pub fn new(directory: DirectoryService<S>) -> Self {
        Self { directory }
    }

    /// Returns the underlying directory service.
    pub fn directory(&self) -> &DirectoryService<S> {
        &self.directory
    }

    /// Resolves one typed request into its JSON result value.
    pub fn resolve(&self, request: Request) -> Result<Value, FacadeError> {
        let value = match request {
            Request::PersonCount {} => Value::from(self.directory.count()),
            Request::AllPersons { phone } => {
                let views: Vec<PersonView> = self
                    .directory
                    .list(phone)
                    .iter()
                    .map(PersonView::from)
                    .collect();
                encode(&views)?
            }
            Request::FindPerson { name } => {
                encode(&self.directory.find(&name).as_ref().map(PersonView::from))?
            }
            Request::AddPerson {
                name,
                phone,
                street,
                city,
            } => {
                let person = self.directory.add(AddPersonRequest {
                    name,
                    phone,
                    street,
                    city,
                })?;
                encode(&PersonView::from(&person))?
            }
            Request::EditNumber { name, phone } => encode(
                &self
                    .directory
                    .edit_number(&name, phone)
                    .as_ref()
                    .map(PersonView::from),
            )?,
        };
        Ok(value)
    }

    /// Serves one typed request.
    pub fn execute(&self, request: Request) -> Response {
        let started_at = Instant::now();
        let operation = request.operation_name();
        match self.resolve(request) {
            Ok(value) => {
                info!(
                    "event=request module=facade status=ok operation={} duration_ms={}",
                    operation,
                    started_at.elapsed().as_millis()
                );
                Response::success(operation, value)
            }
            Err(err) => {
                warn!(
                    "event=request module=facade status=error operation={} duration_ms={} error_code={}",
                    operation,
                    started_at.elapsed().as_millis(),
                    err.error_code_label()
                );
                Response::failure(Some(operation), ResponseError::from(&err))
            }
        }
    }

    /// Decodes and serves one JSON request.
    pub fn execute_json(&self, raw: &str) -> Response {
        match Request::from_json(raw) {
            Ok(request) => self.execute(request),
            Err(err) => {
                let err = FacadeError::from(err);
                warn!(
                    "event=request module=facade status=error operation=unknown error_code={}",
                    err.error_code_label()
                );
                Response::failure(None, ResponseError::from(&err))
            }
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Value, FacadeError> {
    Ok(serde_json::to_value(value)?)
}
