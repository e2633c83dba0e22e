//! Request payloads and the validation rules applied to them.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod lead;

/// One human-readable message per invalid field, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut result = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                result.insert(field.to_string(), message);
            }
        }
        result
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
/// Errors that can occur when turning a payload into a domain value.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid {field}: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: TypeConstraintError,
    },
}

impl FormError {
    /// Binds a constraint failure to the offending field.
    pub fn field(field: &'static str) -> impl FnOnce(TypeConstraintError) -> FormError {
        move |source| FormError::Field { field, source }
    }

    /// Per-field messages suitable for the API response.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            FormError::Validation(errors) => FieldErrors::from(errors),
            FormError::Field { field, source } => {
                let mut errors = FieldErrors::new();
                errors.insert(*field, constraint_message(field, source));
                errors
            }
        }
    }
}

/// Message shown to the caller when a stored-schema constraint fails after
/// the form rules passed.
fn constraint_message(field: &str, err: &TypeConstraintError) -> String {
    let label = match field {
        "name" => "Name",
        "email" => "Email",
        "phone" => "Phone number",
        "company" => "Company name",
        "source" => "Source",
        "status" => "Status",
        "message" => "Message",
        other => other,
    };
    match err {
        TypeConstraintError::TooLong(max) => format!("{label} must be at most {max} characters"),
        TypeConstraintError::TooShort(min) => format!("{label} must be at least {min} characters"),
        TypeConstraintError::EmptyString => format!("{label} is required"),
        other => format!("{label}: {other}"),
    }
}
