use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        lead::{Lead, NewLead, UpdateLead},
        types::{LeadEmail, LeadId},
    },
    pagination::Pagination,
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod lead;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Predicate over the lead collection used for listing and search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeadFilter {
    /// Every lead.
    #[default]
    All,
    /// Leads whose name, email, phone or company contains the term,
    /// ignoring case.
    Search(String),
}

impl LeadFilter {
    /// Builds a filter from an optional term; blank terms match everything.
    pub fn from_term(term: Option<&str>) -> Self {
        match term.map(str::trim) {
            Some(term) if !term.is_empty() => LeadFilter::Search(term.to_string()),
            _ => LeadFilter::All,
        }
    }

    /// Evaluates the predicate against a single lead.
    pub fn matches(&self, lead: &Lead) -> bool {
        match self {
            LeadFilter::All => true,
            LeadFilter::Search(term) => {
                let needle = term.to_lowercase();
                let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
                contains(lead.name.as_str())
                    || contains(lead.email.as_str())
                    || contains(lead.phone.as_str())
                    || lead.company.as_ref().is_some_and(|c| contains(c.as_str()))
            }
        }
    }
}

/// Ordering applied to lead listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadSort {
    /// Most recently created first; rows created in the same instant fall
    /// back to reverse insertion order.
    #[default]
    CreatedAtDesc,
}

/// Filter, sort and window describing one page of leads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadListQuery {
    pub filter: LeadFilter,
    pub sort: LeadSort,
    pub pagination: Pagination,
}

impl LeadListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the query from raw request values, never failing on bad input.
    pub fn from_params(search: Option<&str>, page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            filter: LeadFilter::from_term(search),
            sort: LeadSort::default(),
            pagination: Pagination::from_raw(page, limit),
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.filter = LeadFilter::from_term(Some(&term.into()));
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }

    pub fn skip(&self) -> usize {
        self.pagination.skip()
    }

    pub fn take(&self) -> usize {
        self.pagination.take()
    }
}

pub trait LeadReader {
    /// Looks a lead up by normalized email, optionally ignoring one id.
    fn find_lead_by_email(
        &self,
        email: &LeadEmail,
        exclude: Option<LeadId>,
    ) -> RepositoryResult<Option<Lead>>;
    fn count_leads(&self, filter: &LeadFilter) -> RepositoryResult<usize>;
    fn find_leads_page(&self, query: &LeadListQuery) -> RepositoryResult<Vec<Lead>>;
}

pub trait LeadWriter {
    fn insert_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
    /// Returns `None` when no lead has the given id.
    fn update_lead(&self, id: LeadId, changes: &UpdateLead) -> RepositoryResult<Option<Lead>>;
    /// Returns the removed lead, or `None` when no lead has the given id.
    fn delete_lead(&self, id: LeadId) -> RepositoryResult<Option<Lead>>;
}

/// Diesel-backed repository shared across request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
