//! Strongly-typed value objects used by the lead aggregate.
//!
//! These wrappers enforce the stored schema constraints (name alphabet and
//! length, normalized email, ten-digit phone, bounded free text) so that once
//! a value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of characters in a lead name.
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum number of characters in a lead name.
pub const NAME_MAX_CHARS: usize = 100;
/// Maximum number of characters in a company name.
pub const COMPANY_MAX_CHARS: usize = 100;
/// Maximum number of characters stored for a lead message.
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// Letters and whitespace only.
pub static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is valid"));

/// `local@domain.tld` with an alphabetic top-level domain of two or more letters.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Exactly ten ASCII digits.
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided name contains something other than letters and spaces.
    #[error("name can only contain letters and spaces")]
    InvalidName,
    /// Provided value is shorter than allowed.
    #[error("value must be at least {0} characters")]
    TooShort(usize),
    /// Provided value is longer than allowed.
    #[error("value must be at most {0} characters")]
    TooLong(usize),
    /// Phone number did not meet expected format.
    #[error("phone number must be exactly 10 digits")]
    InvalidPhone,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Trims the input and rejects blank values.
fn trimmed_non_empty<S: Into<String>>(value: S) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed)
}

/// Rejects values longer than `max` characters.
fn ensure_max_chars(value: &str, max: usize) -> Result<(), TypeConstraintError> {
    if value.chars().count() > max {
        return Err(TypeConstraintError::TooLong(max));
    }
    Ok(())
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if EMAIL_PATTERN.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(LeadId, "Store-assigned identifier of a lead.");

/// Shared accessors and conversions for validated string wrappers.
macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Person name: trimmed, letters and spaces, 2 to 100 characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeadName(String);

impl LeadName {
    /// Trims the value and checks alphabet and length.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trimmed_non_empty(value)?;
        if !NAME_PATTERN.is_match(&trimmed) {
            return Err(TypeConstraintError::InvalidName);
        }
        if trimmed.chars().count() < NAME_MIN_CHARS {
            return Err(TypeConstraintError::TooShort(NAME_MIN_CHARS));
        }
        ensure_max_chars(&trimmed, NAME_MAX_CHARS)?;
        Ok(Self(trimmed))
    }
}

string_newtype_impls!(LeadName);

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LeadEmail(String);

impl LeadEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }
}

string_newtype_impls!(LeadEmail);

/// Ten-digit phone number stored exactly as entered (minus surrounding whitespace).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Constructs a phone number ensuring it consists of exactly ten digits.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trimmed_non_empty(value)?;
        if !PHONE_PATTERN.is_match(&trimmed) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(trimmed))
    }
}

string_newtype_impls!(PhoneNumber);

/// Company the lead works for.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    /// Constructs a trimmed, non-empty company name of at most 100 characters.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trimmed_non_empty(value)?;
        ensure_max_chars(&trimmed, COMPANY_MAX_CHARS)?;
        Ok(Self(trimmed))
    }
}

string_newtype_impls!(CompanyName);

/// Free-form note left by the lead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LeadMessage(String);

impl LeadMessage {
    /// Constructs a trimmed, non-empty message of at most 1000 characters.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trimmed_non_empty(value)?;
        ensure_max_chars(&trimmed, MESSAGE_MAX_CHARS)?;
        Ok(Self(trimmed))
    }
}

string_newtype_impls!(LeadMessage);

/// Builds an optional value object, treating blank input as absent.
pub fn optional_text<T, F>(value: Option<String>, build: F) -> Result<Option<T>, TypeConstraintError>
where
    F: FnOnce(String) -> Result<T, TypeConstraintError>,
{
    match value {
        Some(raw) if !raw.trim().is_empty() => build(raw).map(Some),
        _ => Ok(None),
    }
}
