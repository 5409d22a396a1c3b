//! Address book row mapping.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

use domain::models::Record;

/// Number of columns every address book row must carry.
pub const RECORD_COLUMN_COUNT: usize = 6;

/// Database row mapping for the address_book table.
///
/// Columns are read by position (id, name, last_name, middle_name, address,
/// phone) so that `SELECT *` and the explicit column list map identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntity {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub middle_name: String,
    pub address: String,
    pub phone: String,
}

impl<'r> FromRow<'r, PgRow> for RecordEntity {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        if row.len() != RECORD_COLUMN_COUNT {
            return Err(sqlx::Error::Decode(
                format!(
                    "address_book row has {} columns, expected {}",
                    row.len(),
                    RECORD_COLUMN_COUNT
                )
                .into(),
            ));
        }

        Ok(Self {
            id: decode_id(row)?,
            name: row.try_get(1)?,
            last_name: row.try_get(2)?,
            middle_name: row.try_get(3)?,
            address: row.try_get(4)?,
            phone: row.try_get(5)?,
        })
    }
}

/// Reads the first column as a textual identifier, accepting uuid and
/// integer keys.
pub fn decode_id(row: &PgRow) -> Result<String, sqlx::Error> {
    if let Ok(id) = row.try_get::<String, _>(0) {
        return Ok(id);
    }
    if let Ok(id) = row.try_get::<Uuid, _>(0) {
        return Ok(id.to_string());
    }
    if let Ok(id) = row.try_get::<i64, _>(0) {
        return Ok(id.to_string());
    }
    row.try_get::<i32, _>(0).map(|id| id.to_string())
}

impl From<RecordEntity> for Record {
    fn from(entity: RecordEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            last_name: entity.last_name,
            middle_name: entity.middle_name,
            address: entity.address,
            phone: entity.phone,
        }
    }
}
