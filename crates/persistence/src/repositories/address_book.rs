//! Address book gateway.
//!
//! Wraps a connection pool and exposes add, filtered get, update and delete
//! by phone over the `address_book` table.

use sqlx::PgPool;
use tracing::debug;

use domain::models::record::{insert_columns, Record, TABLE};

use crate::db::{create_pool, DatabaseConfig};
use crate::entities::{decode_id, RecordEntity};
use crate::error::GatewayError;
use crate::filter::{select_all_sql, RecordFilter};
use crate::metrics::QueryTimer;

/// `INSERT ... RETURNING id` over the insertable columns.
pub fn insert_sql() -> String {
    let columns: Vec<&str> = insert_columns().collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
        TABLE,
        columns.join(", "),
        placeholders.join(", ")
    )
}

pub const UPDATE_SQL: &str = "UPDATE address_book SET name = $1, last_name = $2, middle_name = $3, address = $4 WHERE phone = $5";

pub const DELETE_BY_PHONE_SQL: &str = "DELETE FROM address_book WHERE phone = $1";

/// Repository for address book records.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct AddressBookRepository {
    pool: PgPool,
}

impl AddressBookRepository {
    /// Creates a new AddressBookRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `config` and wraps it.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, GatewayError> {
        let pool = create_pool(config)
            .await
            .map_err(GatewayError::Connection)?;
        Ok(Self::new(pool))
    }

    /// Opens a pool for `url` with default pool settings.
    pub async fn connect_url(url: &str) -> Result<Self, GatewayError> {
        Self::connect(&DatabaseConfig::from_url(url)).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a record and return its generated identifier.
    ///
    /// The identifier on `record` is ignored.
    pub async fn add(&self, record: &Record) -> Result<String, GatewayError> {
        let sql = insert_sql();
        debug!(sql = %sql, phone = %record.phone, "inserting address book record");

        let timer = QueryTimer::new("insert_record");
        let mut query = sqlx::query(&sql);
        for value in record.insert_values() {
            query = query.bind(value);
        }
        let result = query.fetch_one(&self.pool).await;
        timer.record();

        Ok(decode_id(&result?)?)
    }

    /// Find records matching every non-empty field of `filter`.
    ///
    /// A blank filter returns the whole table. No match is an empty vector.
    pub async fn get(&self, filter: &Record) -> Result<Vec<Record>, GatewayError> {
        let record_filter = RecordFilter::from_record(filter)?;
        let sql = if record_filter.is_empty() {
            select_all_sql()
        } else {
            record_filter.select_sql()?
        };
        let values = record_filter.values();
        debug!(sql = %sql, params = ?values, "selecting address book records");

        let timer = QueryTimer::new("select_records");
        let mut query = sqlx::query_as::<_, RecordEntity>(&sql);
        for value in values {
            query = query.bind(value);
        }
        let result = query.fetch_all(&self.pool).await;
        timer.record();

        Ok(result?.into_iter().map(Record::from).collect())
    }

    /// Update name, last name, middle name and address of the record with
    /// `record.phone`.
    ///
    /// Returns the number of rows updated; an unknown phone updates nothing
    /// and is not an error.
    pub async fn update(&self, record: &Record) -> Result<u64, GatewayError> {
        debug!(sql = UPDATE_SQL, phone = %record.phone, "updating address book record");

        let timer = QueryTimer::new("update_record");
        let result = sqlx::query(UPDATE_SQL)
            .bind(&record.name)
            .bind(&record.last_name)
            .bind(&record.middle_name)
            .bind(&record.address)
            .bind(&record.phone)
            .execute(&self.pool)
            .await;
        timer.record();

        Ok(result?.rows_affected())
    }

    /// Delete the record with the given phone.
    /// Returns the number of rows deleted; an unknown phone is not an error.
    pub async fn delete_by_phone(&self, phone: &str) -> Result<u64, GatewayError> {
        debug!(sql = DELETE_BY_PHONE_SQL, phone = %phone, "deleting address book record");

        let timer = QueryTimer::new("delete_record_by_phone");
        let result = sqlx::query(DELETE_BY_PHONE_SQL)
            .bind(phone)
            .execute(&self.pool)
            .await;
        timer.record();

        Ok(result?.rows_affected())
    }
}
