use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: i64 },
    #[error("Constraint violated: {0}")]
    Constraint(String),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
