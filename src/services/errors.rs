use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Catalog service error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Catalog service rejected the request: {}", .0.join("; "))]
    Backend(Vec<String>),

    #[error("Invalid value: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
