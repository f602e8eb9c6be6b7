use chrono::NaiveDate;
use thiserror::Error;

use crate::Field;

/// Why a raw record could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    /// The record is not a JSON object.
    NotAnObject,
    /// A required field is absent.
    MissingField,
    /// A field holds the wrong primitive type.
    WrongType { expected: &'static str },
}

/// A raw record failed normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed record at index {index}: {}", describe(.field, .kind))]
pub struct MalformedRecordError {
    pub index: usize,
    pub field: Option<Field>,
    pub kind: MalformedKind,
}

fn describe(field: &Option<Field>, kind: &MalformedKind) -> String {
    match (field, kind) {
        (_, MalformedKind::NotAnObject) => "record is not an object".to_string(),
        (Some(field), MalformedKind::MissingField) => format!("missing field '{field}'"),
        (Some(field), MalformedKind::WrongType { expected }) => {
            format!("field '{field}' is not a {expected}")
        }
        (None, _) => "invalid record".to_string(),
    }
}

/// Start date falls after the (adjusted) end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("start date {start} is after end date {end}")]
pub struct InvalidDateRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
