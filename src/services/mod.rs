//! Use cases orchestrating validation, query building and persistence.

use thiserror::Error;

use crate::forms::{FieldErrors, FormError};
use crate::repository::errors::RepositoryError;

pub mod leads;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more payload fields failed their rules.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Request-level validation failure with a single summary message.
    #[error("{0}")]
    Form(String),

    /// Another lead already owns the submitted email.
    #[error("{0}")]
    Conflict(String),

    #[error("lead not found")]
    NotFound,

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.field_errors())
    }
}

impl ServiceError {
    /// Whether the caller can fix the request and retry.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ServiceError::Repository(_))
    }
}
