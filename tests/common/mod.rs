//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use pushkind_leads::db::{ConnectionOptions, DbPool, establish_connection_pool, run_migrations};
use pushkind_leads::domain::lead::NewLead;
use pushkind_leads::domain::types::{LeadEmail, LeadName, PhoneNumber};
use tempfile::TempDir;

/// SQLite database in a temporary directory with migrations applied.
/// The directory and database files are removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 temp path");
        let pool = establish_connection_pool(url, 4, ConnectionOptions::default())
            .expect("create connection pool");
        run_migrations(&pool).expect("run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn new_lead(name: &str, email: &str, phone: &str) -> NewLead {
    NewLead::new(
        LeadName::new(name).unwrap(),
        LeadEmail::new(email).unwrap(),
        PhoneNumber::new(phone).unwrap(),
    )
}
