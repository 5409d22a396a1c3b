//! Common test utilities for integration tests.
//!
//! The tests run against a real PostgreSQL database named by
//! `TEST_DATABASE_URL`. When the variable is not set every test returns early.

#![allow(dead_code)]

use fake::faker::address::en::StreetName;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

use domain::models::Record;
use persistence::AddressBookRepository;

/// Table layout the gateway expects. Created here only for tests.
///
/// Runs as one implicit transaction; the advisory lock keeps concurrently
/// starting tests from racing on the catalog.
const CREATE_TABLE_SQL: &str = r#"
    SELECT pg_advisory_xact_lock(20240917);
    CREATE TABLE IF NOT EXISTS address_book (
        id          TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        name        TEXT NOT NULL,
        last_name   TEXT NOT NULL,
        middle_name TEXT NOT NULL,
        address     TEXT NOT NULL,
        phone       TEXT NOT NULL UNIQUE
    );
"#;

/// Create a test database pool, or `None` if no test database is configured.
pub async fn try_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::raw_sql(CREATE_TABLE_SQL)
        .execute(&pool)
        .await
        .expect("Failed to create address_book table");

    Some(pool)
}

/// Repository over the test database, or `None` if none is configured.
pub async fn try_test_repository() -> Option<AddressBookRepository> {
    try_test_pool().await.map(AddressBookRepository::new)
}

/// Phone number unique to this test run.
pub fn unique_phone() -> String {
    format!("+1-{}", uuid::Uuid::new_v4().simple())
}

/// Record with fake names and a unique phone.
pub fn fake_record() -> Record {
    Record {
        id: String::new(),
        name: FirstName().fake(),
        last_name: LastName().fake(),
        middle_name: FirstName().fake(),
        address: StreetName().fake(),
        phone: unique_phone(),
    }
}

/// Removes the rows created by a test.
pub async fn cleanup_phones(repo: &AddressBookRepository, phones: &[&str]) {
    for phone in phones {
        repo.delete_by_phone(phone)
            .await
            .expect("Failed to clean up test record");
    }
}

/// `address_book` table with a custom layout, isolated in its own schema.
///
/// The repository's connections have `search_path` set to the schema, so the
/// gateway's unqualified `address_book` resolves to this table.
pub struct ScopedTable {
    pub repo: AddressBookRepository,
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl ScopedTable {
    /// Drops the schema and everything in it.
    pub async fn cleanup(self) {
        self.pool.close().await;
        sqlx::raw_sql(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("Failed to drop test schema");
    }
}

/// Creates `address_book (<columns>)` in a fresh schema, or `None` if no test
/// database is configured.
pub async fn try_scoped_table(columns: &str) -> Option<ScopedTable> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;
    let schema = format!("ab_test_{}", uuid::Uuid::new_v4().simple());

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    sqlx::raw_sql(&format!(
        "CREATE SCHEMA {schema}; CREATE TABLE {schema}.address_book ({columns});"
    ))
    .execute(&admin)
    .await
    .expect("Failed to create scoped address_book table");

    let options = PgConnectOptions::from_str(&database_url)
        .expect("Invalid TEST_DATABASE_URL")
        .options([("search_path", schema.as_str())]);
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .expect("Failed to connect to test database");

    Some(ScopedTable {
        repo: AddressBookRepository::new(pool.clone()),
        pool,
        admin,
        schema,
    })
}
