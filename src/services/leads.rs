use crate::domain::lead::{Lead, NewLead, UpdateLead};
use crate::domain::types::LeadId;
use crate::dto::leads::{LeadsPage, LeadsQuery};
use crate::forms::lead::{LeadForm, UpdateLeadForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{LeadListQuery, LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};

const DUPLICATE_EMAIL: &str = "Lead with this email already exists";
const DUPLICATE_EMAIL_ON_UPDATE: &str = "Another lead with this email already exists";
const SEARCH_QUERY_REQUIRED: &str = "Search query is required";

/// Turns a store-level unique violation into the same conflict the
/// pre-check would have reported.
fn map_write_error(err: RepositoryError, conflict_message: &str) -> ServiceError {
    match err {
        RepositoryError::UniqueViolation(details) => {
            log::warn!("Email uniqueness enforced by store: {details}");
            ServiceError::Conflict(conflict_message.to_string())
        }
        other => ServiceError::from(other),
    }
}

/// Non-positive ids can never exist in the store.
fn lead_id(id: i32) -> ServiceResult<LeadId> {
    LeadId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Validates the payload, enforces email uniqueness and persists a new lead.
pub fn create_lead<R>(repo: &R, form: LeadForm) -> ServiceResult<Lead>
where
    R: LeadReader + LeadWriter + ?Sized,
{
    let new_lead = NewLead::try_from(form).map_err(|err| {
        log::warn!("Rejected lead payload: {err}");
        ServiceError::from(err)
    })?;

    if repo.find_lead_by_email(&new_lead.email, None)?.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE_EMAIL.to_string()));
    }

    let lead = repo
        .insert_lead(&new_lead)
        .map_err(|err| map_write_error(err, DUPLICATE_EMAIL))?;

    log::info!("Created lead {}", lead.id);
    Ok(lead)
}

fn load_page<R>(repo: &R, query: LeadListQuery) -> ServiceResult<LeadsPage>
where
    R: LeadReader + ?Sized,
{
    let total = repo.count_leads(&query.filter)?;
    let leads = repo.find_leads_page(&query)?;
    let info = query.pagination.summary(total);

    Ok(LeadsPage {
        leads,
        total: info.total,
        page: info.page,
        limit: info.limit,
        pages: info.pages,
    })
}

/// Returns one page of leads, newest first, optionally filtered by `search`.
pub fn list_leads<R>(repo: &R, params: &LeadsQuery) -> ServiceResult<LeadsPage>
where
    R: LeadReader + ?Sized,
{
    let query = LeadListQuery::from_params(
        params.search.as_deref(),
        params.page.as_deref(),
        params.limit.as_deref(),
    );
    load_page(repo, query)
}

/// Like [`list_leads`] but the search term is mandatory.
pub fn search_leads<R>(repo: &R, params: &LeadsQuery) -> ServiceResult<LeadsPage>
where
    R: LeadReader + ?Sized,
{
    let term = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServiceError::Form(SEARCH_QUERY_REQUIRED.to_string()))?;

    let query = LeadListQuery::from_params(
        Some(term),
        params.page.as_deref(),
        params.limit.as_deref(),
    );
    load_page(repo, query)
}

/// Applies a partial update, re-checking email uniqueness against other leads.
pub fn update_lead<R>(repo: &R, id: i32, form: UpdateLeadForm) -> ServiceResult<Lead>
where
    R: LeadReader + LeadWriter + ?Sized,
{
    let changes = UpdateLead::try_from(form).map_err(|err| {
        log::warn!("Rejected lead update for {id}: {err}");
        ServiceError::from(err)
    })?;
    let id = lead_id(id)?;

    if let Some(email) = &changes.email
        && repo.find_lead_by_email(email, Some(id))?.is_some()
    {
        return Err(ServiceError::Conflict(DUPLICATE_EMAIL_ON_UPDATE.to_string()));
    }

    let lead = repo
        .update_lead(id, &changes)
        .map_err(|err| map_write_error(err, DUPLICATE_EMAIL_ON_UPDATE))?
        .ok_or(ServiceError::NotFound)?;

    log::info!("Updated lead {id}");
    Ok(lead)
}

/// Hard-deletes a lead and returns the removed record.
pub fn delete_lead<R>(repo: &R, id: i32) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let id = lead_id(id)?;
    let lead = repo.delete_lead(id)?.ok_or(ServiceError::NotFound)?;

    log::info!("Deleted lead {id}");
    Ok(lead)
}
