use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead::{
    Lead as DomainLead, LeadSource, LeadStatus, NewLead as DomainNewLead,
    UpdateLead as DomainUpdateLead,
};
use crate::domain::types::{
    CompanyName, LeadEmail, LeadId, LeadMessage, LeadName, PhoneNumber, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::leads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub source: String,
    pub status: String,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub company: Option<&'a str>,
    pub source: &'static str,
    pub status: &'static str,
    pub message: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::leads)]
/// Data used when updating a [`Lead`] record. `None` columns are left as-is.
pub struct UpdateLead<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    /// `Some(None)` writes NULL.
    pub company: Option<Option<&'a str>>,
    pub source: Option<&'static str>,
    pub status: Option<&'static str>,
    pub message: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Lead> for DomainLead {
    type Error = TypeConstraintError;

    fn try_from(lead: Lead) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LeadId::try_from(lead.id)?,
            name: LeadName::new(lead.name)?,
            email: LeadEmail::new(lead.email)?,
            phone: PhoneNumber::new(lead.phone)?,
            company: lead.company.map(CompanyName::new).transpose()?,
            source: LeadSource::try_from(lead.source.as_str())?,
            status: LeadStatus::try_from(lead.status.as_str())?,
            message: lead.message.map(LeadMessage::new).transpose()?,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        })
    }
}

impl<'a> NewLead<'a> {
    /// Borrows the domain payload, stamping both timestamps with `now`.
    pub fn from_domain(lead: &'a DomainNewLead, now: NaiveDateTime) -> Self {
        Self {
            name: lead.name.as_str(),
            email: lead.email.as_str(),
            phone: lead.phone.as_str(),
            company: lead.company.as_ref().map(|c| c.as_str()),
            source: lead.source.as_str(),
            status: lead.status.as_str(),
            message: lead.message.as_ref().map(|m| m.as_str()),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateLead<'a> {
    /// Borrows the domain changes, refreshing `updated_at` with `now`.
    pub fn from_domain(changes: &'a DomainUpdateLead, now: NaiveDateTime) -> Self {
        Self {
            name: changes.name.as_ref().map(|n| n.as_str()),
            email: changes.email.as_ref().map(|e| e.as_str()),
            phone: changes.phone.as_ref().map(|p| p.as_str()),
            company: changes
                .company
                .as_ref()
                .map(|c| c.as_ref().map(|c| c.as_str())),
            source: changes.source.map(LeadSource::as_str),
            status: changes.status.map(LeadStatus::as_str),
            message: changes
                .message
                .as_ref()
                .map(|m| m.as_ref().map(|m| m.as_str())),
            updated_at: now,
        }
    }
}
