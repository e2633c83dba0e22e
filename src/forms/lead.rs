//! Lead payloads accepted by the API and the field rules they must satisfy.
//!
//! The same rules back both the server-side check and the advisory client
//! profile; they differ only in the message length cap.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::lead::{LeadSource, LeadStatus, NewLead, UpdateLead};
use crate::domain::types::{
    CompanyName, EMAIL_PATTERN, LeadEmail, LeadMessage, LeadName, NAME_MIN_CHARS, NAME_PATTERN,
    PHONE_PATTERN, PhoneNumber, TypeConstraintError, optional_text,
};
use crate::forms::{FieldErrors, FormError};

/// Message cap shown by the browser form.
pub const CLIENT_MESSAGE_MAX_CHARS: usize = 400;

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(rule("required", "Name is required"));
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return Err(rule("pattern", "Name can only contain letters and spaces"));
    }
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return Err(rule("length", "Name must be at least 2 characters"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(rule("required", "Email is required"));
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(rule("email", "Invalid email address"));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err(rule("required", "Phone is required"));
    }
    if !PHONE_PATTERN.is_match(trimmed) {
        return Err(rule("phone", "Phone number must be exactly 10 digits"));
    }
    Ok(())
}

fn validate_source(source: &str) -> Result<(), ValidationError> {
    LeadSource::try_from(source)
        .map(|_| ())
        .map_err(|_| rule("source", "Invalid source selected"))
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    LeadStatus::try_from(status)
        .map(|_| ())
        .map_err(|_| rule("status", "Invalid status selected"))
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Body of `POST /leads`.
pub struct LeadForm {
    #[validate(
        required(message = "Name is required"),
        custom(function = "validate_name")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Email is required"),
        custom(function = "validate_email")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Phone is required"),
        custom(function = "validate_phone")
    )]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "Company name must be under 100 characters"))]
    pub company: Option<String>,
    #[validate(custom(function = "validate_source"))]
    pub source: Option<String>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[validate(length(max = 1000, message = "Message must be under 1000 characters"))]
    pub message: Option<String>,
}

impl LeadForm {
    /// Field errors under the browser form's rules, which cap the message at
    /// 400 characters instead of the stored 1000.
    pub fn client_field_errors(&self) -> FieldErrors {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(err) => FieldErrors::from(&err),
        };
        if self
            .message
            .as_deref()
            .is_some_and(|m| m.chars().count() > CLIENT_MESSAGE_MAX_CHARS)
        {
            errors.insert("message", "Message must be under 400 characters");
        }
        errors
    }
}

impl TryFrom<LeadForm> for NewLead {
    type Error = FormError;

    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = LeadName::new(form.name.unwrap_or_default()).map_err(FormError::field("name"))?;
        let email =
            LeadEmail::new(form.email.unwrap_or_default()).map_err(FormError::field("email"))?;
        let phone =
            PhoneNumber::new(form.phone.unwrap_or_default()).map_err(FormError::field("phone"))?;
        let company =
            optional_text(form.company, CompanyName::new).map_err(FormError::field("company"))?;
        let message =
            optional_text(form.message, LeadMessage::new).map_err(FormError::field("message"))?;
        let source = form
            .source
            .as_deref()
            .map(LeadSource::try_from)
            .transpose()
            .map_err(FormError::field("source"))?
            .unwrap_or_default();
        let status = form
            .status
            .as_deref()
            .map(LeadStatus::try_from)
            .transpose()
            .map_err(FormError::field("status"))?
            .unwrap_or_default();

        Ok(NewLead::new(name, email, phone)
            .with_company(company)
            .with_source(source)
            .with_status(status)
            .with_message(message))
    }
}

/// Absent stays absent; a blank value clears the column.
fn clearable_text<T, F>(
    value: Option<String>,
    build: F,
) -> Result<Option<Option<T>>, TypeConstraintError>
where
    F: FnOnce(String) -> Result<T, TypeConstraintError>,
{
    value
        .map(|text| optional_text(Some(text), build))
        .transpose()
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Body of `PUT /leads/{id}`. Only the fields present are checked and changed;
/// a blank `company` or `message` clears the stored value.
pub struct UpdateLeadForm {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "Company name must be under 100 characters"))]
    pub company: Option<String>,
    #[validate(custom(function = "validate_source"))]
    pub source: Option<String>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[validate(length(max = 1000, message = "Message must be under 1000 characters"))]
    pub message: Option<String>,
}

impl TryFrom<UpdateLeadForm> for UpdateLead {
    type Error = FormError;

    fn try_from(form: UpdateLeadForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(UpdateLead {
            name: form
                .name
                .map(LeadName::new)
                .transpose()
                .map_err(FormError::field("name"))?,
            email: form
                .email
                .map(LeadEmail::new)
                .transpose()
                .map_err(FormError::field("email"))?,
            phone: form
                .phone
                .map(PhoneNumber::new)
                .transpose()
                .map_err(FormError::field("phone"))?,
            company: clearable_text(form.company, CompanyName::new)
                .map_err(FormError::field("company"))?,
            source: form
                .source
                .as_deref()
                .map(LeadSource::try_from)
                .transpose()
                .map_err(FormError::field("source"))?,
            status: form
                .status
                .as_deref()
                .map(LeadStatus::try_from)
                .transpose()
                .map_err(FormError::field("status"))?,
            message: clearable_text(form.message, LeadMessage::new)
                .map_err(FormError::field("message"))?,
        })
    }
}
