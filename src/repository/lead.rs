//! Diesel implementation of the lead store.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::unicode_lower,
    domain::{
        lead::{Lead, NewLead, UpdateLead},
        types::{LeadEmail, LeadId},
    },
    models::lead::{Lead as DbLead, NewLead as DbNewLead, UpdateLead as DbUpdateLead},
    repository::{
        DieselRepository, LeadFilter, LeadListQuery, LeadReader, LeadSort, LeadWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::leads,
};

/// Escapes LIKE wildcards so the term is matched literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// `leads` filtered by the given predicate. Both sides are folded with
/// [`unicode_lower`] so matching ignores case beyond ASCII.
fn filtered(filter: &LeadFilter) -> leads::BoxedQuery<'static, Sqlite> {
    let query = leads::table.into_boxed();
    match filter {
        LeadFilter::All => query,
        LeadFilter::Search(term) => {
            let pattern = like_pattern(&term.to_lowercase());
            query.filter(
                unicode_lower(leads::name.nullable())
                    .like(pattern.clone())
                    .escape('\\')
                    .or(unicode_lower(leads::email.nullable())
                        .like(pattern.clone())
                        .escape('\\'))
                    .or(unicode_lower(leads::phone.nullable())
                        .like(pattern.clone())
                        .escape('\\'))
                    .or(unicode_lower(leads::company).like(pattern).escape('\\')),
            )
        }
    }
}

fn to_domain(db_lead: DbLead) -> RepositoryResult<Lead> {
    Lead::try_from(db_lead).map_err(RepositoryError::from)
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl LeadReader for DieselRepository {
    fn find_lead_by_email(
        &self,
        email: &LeadEmail,
        exclude: Option<LeadId>,
    ) -> RepositoryResult<Option<Lead>> {
        let mut conn = self.conn()?;
        let mut query = leads::table
            .filter(leads::email.eq(email.as_str().to_owned()))
            .into_boxed();
        if let Some(id) = exclude {
            query = query.filter(leads::id.ne(id.get()));
        }

        let db_lead = query.first::<DbLead>(&mut conn).optional()?;

        db_lead.map(to_domain).transpose()
    }

    fn count_leads(&self, filter: &LeadFilter) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let total: i64 = filtered(filter).count().get_result(&mut conn)?;

        usize::try_from(total)
            .map_err(|e| RepositoryError::Unexpected(format!("Invalid row count {total}: {e}")))
    }

    fn find_leads_page(&self, query: &LeadListQuery) -> RepositoryResult<Vec<Lead>> {
        let mut conn = self.conn()?;
        let ordered = match query.sort {
            LeadSort::CreatedAtDesc => {
                filtered(&query.filter).order((leads::created_at.desc(), leads::id.desc()))
            }
        };

        ordered
            .limit(to_i64(query.take()))
            .offset(to_i64(query.skip()))
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(to_domain)
            .collect()
    }
}

impl LeadWriter for DieselRepository {
    fn insert_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        let mut conn = self.conn()?;
        let insertable = DbNewLead::from_domain(new_lead, Utc::now().naive_utc());

        let db_lead = diesel::insert_into(leads::table)
            .values(&insertable)
            .get_result::<DbLead>(&mut conn)?;

        to_domain(db_lead)
    }

    fn update_lead(&self, id: LeadId, changes: &UpdateLead) -> RepositoryResult<Option<Lead>> {
        let mut conn = self.conn()?;
        let changeset = DbUpdateLead::from_domain(changes, Utc::now().naive_utc());

        let db_lead = diesel::update(leads::table.find(id.get()))
            .set(&changeset)
            .get_result::<DbLead>(&mut conn)
            .optional()?;

        db_lead.map(to_domain).transpose()
    }

    fn delete_lead(&self, id: LeadId) -> RepositoryResult<Option<Lead>> {
        let mut conn = self.conn()?;

        let db_lead = diesel::delete(leads::table.find(id.get()))
            .get_result::<DbLead>(&mut conn)
            .optional()?;

        db_lead.map(to_domain).transpose()
    }
}
