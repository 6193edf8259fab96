// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected by an article rule (required fields, unique slug,
    /// unknown status or category).
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage failure surfaced unchanged from the driver.
    #[error("storage error: {0}")]
    Persistence(String),
}
