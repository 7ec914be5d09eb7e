//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport
/// concerns (status codes, malformed bodies) belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No entity matched the requested identifier.
    #[error("Not Found")]
    NotFound,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }
}
