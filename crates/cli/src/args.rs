//! Filter arguments of the form `field=value`.

use domain::models::{Record, UnknownField};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Expected field=value, got {0:?}")]
    Malformed(String),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

/// Builds a filter record from `field=value` arguments.
///
/// Field names may be given as field, column or camelCase names. A later
/// argument for the same field wins.
pub fn parse_filter<I, S>(args: I) -> Result<Record, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut record = Record::default();
    for arg in args {
        let arg = arg.as_ref();
        let (field, value) = arg
            .split_once('=')
            .ok_or_else(|| ArgsError::Malformed(arg.to_string()))?;
        if field.trim().is_empty() {
            return Err(ArgsError::Malformed(arg.to_string()));
        }
        record.set_field(field, value)?;
    }
    Ok(record)
}
