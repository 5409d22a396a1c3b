//! Domain models for the address book.

pub mod record;

pub use record::{FieldSpec, Record, RecordField, UnknownField, FIELDS, TABLE};
