//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Catalog contains no services")]
    EmptyCatalog,

    #[error("Duplicate service id: {0}")]
    DuplicateServiceId(String),

    #[error("Unknown service id: {0}")]
    UnknownService(String),

    #[error("Invalid contact info: {0}")]
    InvalidContact(String),
}
