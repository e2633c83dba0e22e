//! Error conversion glue between the domain and the persistence layer.
//!
//! Domain types only know about [`TypeConstraintError`]; rows that fail to
//! rebuild a domain value surface as repository validation errors.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
