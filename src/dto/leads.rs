//! Request and response shapes of the `/api/leads` endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::lead::Lead;
use crate::forms::FieldErrors;
use crate::pagination::PageInfo;

/// Query string accepted by the list and search endpoints.
///
/// Pagination values stay raw strings so malformed input falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadsQuery {
    /// Optional filter for `GET /leads`.
    pub search: Option<String>,
    /// Mandatory term for `GET /leads/search`.
    pub query: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// One page of leads plus the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadsPage {
    pub leads: Vec<Lead>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub pages: usize,
}

impl LeadsPage {
    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            total: self.total,
            page: self.page,
            limit: self.limit,
            pages: self.pages,
        }
    }
}

/// Envelope for endpoints returning a single lead.
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub success: bool,
    pub data: Lead,
    pub message: String,
}

impl LeadResponse {
    pub fn new(data: Lead, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Envelope for list and search results.
#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub success: bool,
    pub leads: Vec<Lead>,
    pub pagination: PageInfo,
}

impl From<LeadsPage> for LeadListResponse {
    fn from(page: LeadsPage) -> Self {
        let pagination = page.page_info();
        Self {
            success: true,
            leads: page.leads,
            pagination,
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_omits_empty_errors() {
        let value = serde_json::to_value(ErrorResponse::new("Lead not found")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Lead not found");
        assert!(value.get("errors").is_none());

        let mut fields = FieldErrors::new();
        fields.insert("phone", "Phone number must be exactly 10 digits");
        let value =
            serde_json::to_value(ErrorResponse::new("Validation failed").with_errors(fields))
                .unwrap();
        assert_eq!(
            value["errors"]["phone"],
            "Phone number must be exactly 10 digits"
        );
    }

    #[test]
    fn list_response_nests_pagination() {
        let page = LeadsPage {
            leads: Vec::new(),
            total: 25,
            page: 2,
            limit: 10,
            pages: 3,
        };
        let value = serde_json::to_value(LeadListResponse::from(page)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["leads"], serde_json::json!([]));
        assert_eq!(value["pagination"]["total"], 25);
        assert_eq!(value["pagination"]["pages"], 3);
    }
}
