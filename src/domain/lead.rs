use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CompanyName, LeadEmail, LeadId, LeadMessage, LeadName, PhoneNumber, TypeConstraintError,
};

/// Channel through which the lead reached us.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadSource {
    #[default]
    Website,
    Referral,
    Ad,
    Other,
}

/// Position of the lead in the sales funnel.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadStatus {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Converted,
    Lost,
}

impl LeadSource {
    pub const ALL: [LeadSource; 4] = [
        LeadSource::Website,
        LeadSource::Referral,
        LeadSource::Ad,
        LeadSource::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Referral => "Referral",
            LeadSource::Ad => "Ad",
            LeadSource::Other => "Other",
        }
    }
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::InProgress,
        LeadStatus::Converted,
        LeadStatus::Lost,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::InProgress => "In Progress",
            LeadStatus::Converted => "Converted",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LeadSource {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        LeadSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown source {s:?}")))
    }
}

impl TryFrom<&str> for LeadStatus {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown status {s:?}")))
    }
}

/// A prospective customer captured by the system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: PhoneNumber,
    pub company: Option<CompanyName>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub message: Option<LeadMessage>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated payload for inserting a lead. The store assigns id and timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLead {
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: PhoneNumber,
    pub company: Option<CompanyName>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub message: Option<LeadMessage>,
}

impl NewLead {
    #[must_use]
    pub fn new(name: LeadName, email: LeadEmail, phone: PhoneNumber) -> Self {
        Self {
            name,
            email,
            phone,
            company: None,
            source: LeadSource::default(),
            status: LeadStatus::default(),
            message: None,
        }
    }

    #[must_use]
    pub fn with_company(mut self, company: Option<CompanyName>) -> Self {
        self.company = company;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: LeadSource) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: Option<LeadMessage>) -> Self {
        self.message = message;
        self
    }
}

/// Partial update. `None` leaves the stored value untouched; for the
/// optional columns `Some(None)` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateLead {
    pub name: Option<LeadName>,
    pub email: Option<LeadEmail>,
    pub phone: Option<PhoneNumber>,
    pub company: Option<Option<CompanyName>>,
    pub source: Option<LeadSource>,
    pub status: Option<LeadStatus>,
    pub message: Option<Option<LeadMessage>>,
}

impl UpdateLead {
    /// Applies the present fields to an existing lead.
    pub fn apply_to(&self, lead: &mut Lead) {
        if let Some(name) = &self.name {
            lead.name = name.clone();
        }
        if let Some(email) = &self.email {
            lead.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            lead.phone = phone.clone();
        }
        if let Some(company) = &self.company {
            lead.company = company.clone();
        }
        if let Some(source) = self.source {
            lead.source = source;
        }
        if let Some(status) = self.status {
            lead.status = status;
        }
        if let Some(message) = &self.message {
            lead.message = message.clone();
        }
    }
}
