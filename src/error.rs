//! Error types for the inventory service
//!
//! One outcome per failure kind the HTTP layer has to tell apart, using
//! thiserror. Storage failures pass through unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::repository::RepositoryError;

// == Service Error Enum ==
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed input, reported before any repository call
    #[error("{0}")]
    Validation(String),

    /// The addressed entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A category with this name already exists
    #[error("Category with the name '{0}' already exists")]
    Conflict(String),

    /// A product references a category that does not exist
    #[error("Category does not exist: {0}")]
    DependencyMissing(i64),

    /// Repository failure, propagated unchanged
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::DependencyMissing(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ServiceError::Storage(err) => {
                tracing::error!(error = %err, "Storage error while handling request");
                "An unexpected error occurred.".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service layer.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: ServiceError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (ServiceError::validation("Category name is required"), 400),
            (
                ServiceError::NotFound {
                    entity: "Product",
                    id: 3,
                },
                404,
            ),
            (ServiceError::Conflict("Toys".to_string()), 409),
            (ServiceError::DependencyMissing(999), 400),
            (
                ServiceError::Storage(RepositoryError::Unavailable("down".to_string())),
                500,
            ),
        ];

        for (error, expected) in cases {
            let (status, json) = body_json(error).await;
            assert_eq!(status.as_u16(), expected);
            assert!(json["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_storage_details_are_not_leaked() {
        let error = ServiceError::from(RepositoryError::Unavailable("secret dsn".to_string()));
        let (_, json) = body_json(error).await;
        assert_eq!(json["error"], "An unexpected error occurred.");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ServiceError::Conflict("Toys".to_string()).to_string(),
            "Category with the name 'Toys' already exists"
        );
        assert_eq!(
            ServiceError::DependencyMissing(999).to_string(),
            "Category does not exist: 999"
        );
    }
}
