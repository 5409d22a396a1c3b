//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod record;

pub use record::{decode_id, RecordEntity, RECORD_COLUMN_COUNT};
