//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::lead::{Lead, NewLead, UpdateLead};
use crate::domain::types::{LeadEmail, LeadId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{LeadFilter, LeadListQuery, LeadReader, LeadWriter};

mock! {
    pub Repository {}

    impl LeadReader for Repository {
        fn find_lead_by_email(
            &self,
            email: &LeadEmail,
            exclude: Option<LeadId>,
        ) -> RepositoryResult<Option<Lead>>;
        fn count_leads(&self, filter: &LeadFilter) -> RepositoryResult<usize>;
        fn find_leads_page(&self, query: &LeadListQuery) -> RepositoryResult<Vec<Lead>>;
    }

    impl LeadWriter for Repository {
        fn insert_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
        fn update_lead(&self, id: LeadId, changes: &UpdateLead) -> RepositoryResult<Option<Lead>>;
        fn delete_lead(&self, id: LeadId) -> RepositoryResult<Option<Lead>>;
    }
}
