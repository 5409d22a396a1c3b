//! Dynamic filter builder for address book lookups.
//!
//! Turns a partially filled [`Record`] into a conjunction of equality
//! predicates. Only columns are written into the SQL text; values are kept
//! aside and bound positionally.

use domain::models::record::{is_valid_column, Record, TABLE};

use crate::error::GatewayError;

/// Column list used by every filtered select, in row-mapper order.
pub const SELECT_COLUMNS: &str = "id, name, last_name, middle_name, address, phone";

/// Query used when the filter record is blank.
pub fn select_all_sql() -> String {
    format!("SELECT * FROM {};", TABLE)
}

/// One equality predicate of a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// `""` for the first condition, `"AND"` afterwards.
    pub joiner: &'static str,
    /// Positional placeholder, `$1`, `$2`, ...
    pub placeholder: String,
    pub column: &'static str,
    /// Render the column as `column::text` so a text parameter compares
    /// against uuid or integer columns.
    pub compare_as_text: bool,
    pub value: String,
}

impl Condition {
    /// Left-hand side of the predicate.
    pub fn column_expr(&self) -> String {
        if self.compare_as_text {
            format!("{}::text", self.column)
        } else {
            self.column.to_string()
        }
    }

    /// Renders `<joiner> <column> = <placeholder>`, omitting an empty joiner.
    pub fn render(&self) -> String {
        if self.joiner.is_empty() {
            format!("{} = {}", self.column_expr(), self.placeholder)
        } else {
            format!(
                "{} {} = {}",
                self.joiner,
                self.column_expr(),
                self.placeholder
            )
        }
    }
}

/// Parameterized filter derived from the specified fields of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    conditions: Vec<Condition>,
}

impl RecordFilter {
    /// Builds a filter from the non-empty, filterable fields of `record`.
    ///
    /// Fields are visited in declaration order and numbered from `$1`.
    pub fn from_record(record: &Record) -> Result<Self, GatewayError> {
        let mut conditions = Vec::new();

        let specified = record
            .specified_fields()
            .filter_map(|(spec, value)| spec.column.map(|column| (spec, column, value)));

        for (spec, column, value) in specified {
            if !is_valid_column(column) {
                return Err(GatewayError::Validation(format!(
                    "column {:?} for field {} is not a valid identifier",
                    column, spec.field
                )));
            }

            let joiner = if conditions.is_empty() { "" } else { "AND" };
            conditions.push(Condition {
                joiner,
                placeholder: format!("${}", conditions.len() + 1),
                column,
                compare_as_text: spec.compare_as_text,
                value: value.to_string(),
            });
        }

        Ok(Self { conditions })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Values to bind, in placeholder order.
    pub fn values(&self) -> Vec<&str> {
        self.conditions.iter().map(|c| c.value.as_str()).collect()
    }

    /// Renders `WHERE <col1> = $1 [AND <col2> = $2 ...]`.
    ///
    /// An empty filter is rejected; callers fall back to [`select_all_sql`].
    pub fn where_clause(&self) -> Result<String, GatewayError> {
        if self.conditions.is_empty() {
            return Err(GatewayError::Validation(
                "cannot render a WHERE clause without conditions".to_string(),
            ));
        }

        let predicates: Vec<String> = self.conditions.iter().map(Condition::render).collect();
        Ok(format!("WHERE {}", predicates.join(" ")))
    }

    /// Full select statement for this filter.
    pub fn select_sql(&self) -> Result<String, GatewayError> {
        Ok(format!(
            "SELECT {} FROM {} {};",
            SELECT_COLUMNS,
            TABLE,
            self.where_clause()?
        ))
    }
}
