use pushkind_leads::domain::lead::{LeadSource, LeadStatus, UpdateLead};
use pushkind_leads::domain::types::{CompanyName, LeadEmail, LeadId, LeadMessage, LeadName};
use pushkind_leads::repository::errors::RepositoryError;
use pushkind_leads::repository::{
    DieselRepository, LeadFilter, LeadListQuery, LeadReader, LeadWriter,
};

mod common;

use common::new_lead;

#[test]
fn test_lead_repository_crud() {
    let test_db = common::TestDb::new("test_lead_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .insert_lead(
            &new_lead("Alice Smith", "alice@example.com", "0123456789")
                .with_company(Some(CompanyName::new("Acme Corp").unwrap()))
                .with_source(LeadSource::Referral)
                .with_message(Some(LeadMessage::new("Call me & my team").unwrap())),
        )
        .unwrap();

    assert!(created.id.get() > 0);
    assert_eq!(created.source, LeadSource::Referral);
    assert_eq!(created.status, LeadStatus::New);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = repo
        .find_lead_by_email(&created.email, None)
        .unwrap()
        .unwrap();
    assert_eq!(fetched, created);
    assert_eq!(
        fetched.message.as_ref().map(|m| m.as_str()),
        Some("Call me & my team")
    );

    let changes = UpdateLead {
        name: Some(LeadName::new("Alice Jones").unwrap()),
        status: Some(LeadStatus::InProgress),
        ..UpdateLead::default()
    };
    let updated = repo.update_lead(created.id, &changes).unwrap().unwrap();
    assert_eq!(updated.name.as_str(), "Alice Jones");
    assert_eq!(updated.status, LeadStatus::InProgress);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.company, created.company);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let deleted = repo.delete_lead(created.id).unwrap().unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(repo
        .find_lead_by_email(&created.email, None)
        .unwrap()
        .is_none());
    assert_eq!(repo.count_leads(&LeadFilter::All).unwrap(), 0);
    assert!(repo.delete_lead(created.id).unwrap().is_none());
}

#[test]
fn test_update_unknown_lead_returns_none() {
    let test_db = common::TestDb::new("test_update_unknown_lead_returns_none.db");
    let repo = DieselRepository::new(test_db.pool());

    let changes = UpdateLead {
        status: Some(LeadStatus::Lost),
        ..UpdateLead::default()
    };
    let result = repo.update_lead(LeadId::new(42).unwrap(), &changes).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_find_lead_by_email_honours_exclusion() {
    let test_db = common::TestDb::new("test_find_lead_by_email_honours_exclusion.db");
    let repo = DieselRepository::new(test_db.pool());

    let alice = repo
        .insert_lead(&new_lead("Alice", "alice@example.com", "0123456789"))
        .unwrap();
    let email = LeadEmail::new("ALICE@example.com").unwrap();

    let found = repo.find_lead_by_email(&email, None).unwrap();
    assert_eq!(found.map(|l| l.id), Some(alice.id));
    assert!(repo
        .find_lead_by_email(&email, Some(alice.id))
        .unwrap()
        .is_none());
}

#[test]
fn test_duplicate_email_is_unique_violation() {
    let test_db = common::TestDb::new("test_duplicate_email_is_unique_violation.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.insert_lead(&new_lead("Alice", "alice@example.com", "0123456789"))
        .unwrap();
    let err = repo
        .insert_lead(&new_lead("Other", "alice@example.com", "9876543210"))
        .unwrap_err();

    assert!(matches!(err, RepositoryError::UniqueViolation(_)));
}

#[test]
fn test_list_is_newest_first_and_paginated() {
    let test_db = common::TestDb::new("test_list_is_newest_first_and_paginated.db");
    let repo = DieselRepository::new(test_db.pool());

    for i in 0..25 {
        repo.insert_lead(&new_lead(
            "Lead Person",
            &format!("lead{i}@example.com"),
            "0123456789",
        ))
        .unwrap();
    }

    assert_eq!(repo.count_leads(&LeadFilter::All).unwrap(), 25);

    let first = repo
        .find_leads_page(&LeadListQuery::new().paginate(1, 10))
        .unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].email.as_str(), "lead24@example.com");
    assert!(first.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let third = repo
        .find_leads_page(&LeadListQuery::new().paginate(3, 10))
        .unwrap();
    assert_eq!(third.len(), 5);
    assert_eq!(third[4].email.as_str(), "lead0@example.com");

    let beyond = repo
        .find_leads_page(&LeadListQuery::new().paginate(4, 10))
        .unwrap();
    assert!(beyond.is_empty());
}

#[test]
fn test_search_matches_any_text_field() {
    let test_db = common::TestDb::new("test_search_matches_any_text_field.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.insert_lead(
        &new_lead("Jane Roe", "jane@example.com", "0123456789")
            .with_company(Some(CompanyName::new("Acme Corp").unwrap())),
    )
    .unwrap();
    repo.insert_lead(
        &new_lead("John Doe", "john@globex.io", "5550001111")
            .with_company(Some(CompanyName::new("Globex").unwrap())),
    )
    .unwrap();
    repo.insert_lead(&new_lead("Ann Lee", "ann@example.com", "9998887777"))
        .unwrap();

    let search = |term: &str| {
        let query = LeadListQuery::new().search(term);
        let total = repo.count_leads(&query.filter).unwrap();
        let names: Vec<String> = repo
            .find_leads_page(&query)
            .unwrap()
            .into_iter()
            .map(|l| l.name.into_inner())
            .collect();
        (total, names)
    };

    assert_eq!(search("acme"), (1, vec!["Jane Roe".to_string()]));
    assert_eq!(search("GLOBEX"), (1, vec!["John Doe".to_string()]));
    assert_eq!(search("888"), (1, vec!["Ann Lee".to_string()]));
    assert_eq!(search("example.com").0, 2);
    assert_eq!(search("%"), (0, Vec::<String>::new()));
}

#[test]
fn test_update_clears_optional_columns() {
    let test_db = common::TestDb::new("test_update_clears_optional_columns.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .insert_lead(
            &new_lead("Alice", "alice@example.com", "0123456789")
                .with_company(Some(CompanyName::new("Acme Corp").unwrap()))
                .with_message(Some(LeadMessage::new("hello").unwrap())),
        )
        .unwrap();

    let changes = UpdateLead {
        company: Some(None),
        ..UpdateLead::default()
    };
    let updated = repo.update_lead(created.id, &changes).unwrap().unwrap();

    assert!(updated.company.is_none());
    assert_eq!(updated.message, created.message);
}

#[test]
fn test_search_folds_non_ascii_case() {
    let test_db = common::TestDb::new("test_search_folds_non_ascii_case.db");
    let repo = DieselRepository::new(test_db.pool());

    let lead = repo
        .insert_lead(
            &new_lead("Hans Meier", "hans@example.de", "0123456789")
                .with_company(Some(CompanyName::new("Ärzte Müller GmbH").unwrap())),
        )
        .unwrap();
    repo.insert_lead(&new_lead("Ann Lee", "ann@example.com", "9998887777"))
        .unwrap();

    for term in ["ärzte", "MÜLLER", "Ärzte müller"] {
        let query = LeadListQuery::new().search(term);
        assert!(query.filter.matches(&lead), "{term}");
        assert_eq!(repo.count_leads(&query.filter).unwrap(), 1, "{term}");
        let found = repo.find_leads_page(&query).unwrap();
        assert_eq!(found.len(), 1, "{term}");
        assert_eq!(found[0].id, lead.id);
    }
}
