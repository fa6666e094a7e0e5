//! Core domain logic for the phonebook directory.
//! This crate is the single source of truth for directory invariants.

pub mod config;
pub mod facade;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, DirectoryConfig};
pub use facade::query_facade::{FacadeError, QueryFacade};
pub use facade::request::{Request, RequestError};
pub use facade::response::{ErrorCode, PersonView, Response, ResponseError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::address::Address;
pub use model::person::{Person, PersonId, PersonValidationError};
pub use repo::person_store::{InMemoryPersonStore, PersonSnapshot, PersonStore, StoreUpdate};
pub use repo::seed::demo_persons;
pub use service::address_composer::compose_address;
pub use service::directory_service::{
    AddPersonRequest, DirectoryError, DirectoryResult, DirectoryService, PhoneFilter,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
