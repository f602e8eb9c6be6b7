use thiserror::Error;

/// A record's `datetime` could not be read as a calendar date.
///
/// Non-fatal: the record is left out of the filtered result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {index} has unparseable datetime '{value}'")]
pub struct UnparseableDateError {
    pub index: usize,
    pub value: String,
}
