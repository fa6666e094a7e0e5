//! Typed request boundary in front of the directory service.
//!
//! # Responsibility
//! - Decode and shape-check incoming requests before they reach services.
//! - Dispatch one operation per request.
//! - Encode results and structured errors into a stable JSON envelope.
//!
//! # Invariants
//! - Malformed requests never reach the directory service.
//! - "Not found" results are encoded as `null` data, not as errors.

pub mod query_facade;
pub mod request;
pub mod response;
