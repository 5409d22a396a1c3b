//! Address book record and its column declarations.
//!
//! Every field of [`Record`] is bound to an `address_book` column through the
//! [`FIELDS`] table. The insert column list and the dynamic filter column list
//! are both derived from it, so a schema change only touches the table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Name of the table backing the address book.
pub const TABLE: &str = "address_book";

/// A single address book entry.
///
/// An empty string means "not specified" wherever a record is used as a
/// filter. A contact whose name really is `""` therefore cannot be searched
/// for by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Server-assigned identifier. Ignored on insert.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub address: String,
    /// Natural key used by update and delete.
    #[serde(default)]
    pub phone: String,
}

/// Fields of a [`Record`], in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    Name,
    LastName,
    MiddleName,
    Address,
    Phone,
}

impl RecordField {
    /// Rust-side field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::Name => "name",
            RecordField::LastName => "last_name",
            RecordField::MiddleName => "middle_name",
            RecordField::Address => "address",
            RecordField::Phone => "phone",
        }
    }

    /// Column declaration for this field.
    pub fn spec(&self) -> &'static FieldSpec {
        // FIELDS is declared in enum order.
        &FIELDS[*self as usize]
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a field name does not match any [`Record`] field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown record field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for RecordField {
    type Err = UnknownField;

    /// Accepts the field name, its column name or the camelCase JSON name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FIELDS
            .iter()
            .find(|spec| {
                spec.field.as_str() == wanted
                    || spec.column == Some(wanted)
                    || spec.json_name == wanted
            })
            .map(|spec| spec.field)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Static declaration binding a record field to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: RecordField,
    /// Column name. `None` keeps the field out of generated SQL entirely.
    pub column: Option<&'static str>,
    pub json_name: &'static str,
    /// Whether the column is written by insert. The identifier is server-assigned.
    pub insertable: bool,
    /// Compare as `column::text` in filters. Set for columns whose database
    /// type may be uuid or integer while the record carries a string.
    pub compare_as_text: bool,
}

impl FieldSpec {
    /// Whether the field takes part in dynamic filters.
    pub fn is_filterable(&self) -> bool {
        self.column.is_some()
    }
}

/// Column declarations for [`Record`], in declaration order.
pub static FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        field: RecordField::Id,
        column: Some("id"),
        json_name: "id",
        insertable: false,
        compare_as_text: true,
    },
    FieldSpec {
        field: RecordField::Name,
        column: Some("name"),
        json_name: "name",
        insertable: true,
        compare_as_text: false,
    },
    FieldSpec {
        field: RecordField::LastName,
        column: Some("last_name"),
        json_name: "lastName",
        insertable: true,
        compare_as_text: false,
    },
    FieldSpec {
        field: RecordField::MiddleName,
        column: Some("middle_name"),
        json_name: "middleName",
        insertable: true,
        compare_as_text: false,
    },
    FieldSpec {
        field: RecordField::Address,
        column: Some("address"),
        json_name: "address",
        insertable: true,
        compare_as_text: false,
    },
    FieldSpec {
        field: RecordField::Phone,
        column: Some("phone"),
        json_name: "phone",
        insertable: true,
        compare_as_text: false,
    },
];

// Columns are interpolated into SQL text, values never are.
lazy_static::lazy_static! {
    pub static ref COLUMN_REGEX: regex::Regex = regex::Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap();
}

/// Returns true if `column` is a plain lowercase SQL identifier.
pub fn is_valid_column(column: &str) -> bool {
    COLUMN_REGEX.is_match(column)
}

impl Record {
    /// Value of the given field.
    pub fn value(&self, field: RecordField) -> &str {
        match field {
            RecordField::Id => &self.id,
            RecordField::Name => &self.name,
            RecordField::LastName => &self.last_name,
            RecordField::MiddleName => &self.middle_name,
            RecordField::Address => &self.address,
            RecordField::Phone => &self.phone,
        }
    }

    fn value_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::Id => &mut self.id,
            RecordField::Name => &mut self.name,
            RecordField::LastName => &mut self.last_name,
            RecordField::MiddleName => &mut self.middle_name,
            RecordField::Address => &mut self.address,
            RecordField::Phone => &mut self.phone,
        }
    }

    /// Sets a field by name, see [`RecordField::from_str`] for accepted names.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field: RecordField = name.parse()?;
        *self.value_mut(field) = value.into();
        Ok(())
    }

    /// Iterates over every declared field with its current value.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> + '_ {
        FIELDS.iter().map(move |spec| (spec, self.value(spec.field)))
    }

    /// Filterable fields that carry a non-empty value, in declaration order.
    pub fn specified_fields(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> + '_ {
        self.fields()
            .filter(|(spec, value)| spec.is_filterable() && !value.is_empty())
    }

    /// True when no filterable field carries a value.
    pub fn is_blank(&self) -> bool {
        self.specified_fields().next().is_none()
    }

    /// Values written by insert, aligned with [`insert_columns`].
    pub fn insert_values(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields()
            .filter(|(spec, _)| spec.insertable && spec.column.is_some())
            .map(|(_, value)| value)
    }
}

/// Columns written by insert, in declaration order.
pub fn insert_columns() -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .filter(|spec| spec.insertable)
        .filter_map(|spec| spec.column)
}
