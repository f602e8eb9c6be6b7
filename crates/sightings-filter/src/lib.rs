//! Option extraction and filtering over the canonical record set.
//!
//! Both operations are read-only over the canonical set. Filtering returns a
//! stable subsequence of borrowed records so the set itself is never copied
//! or reordered.

pub mod dates;
pub mod engine;
pub mod error;
pub mod options;

pub use dates::{parse_control_date, parse_record_date};
pub use engine::{FilterReport, filter, filter_with_report};
pub use error::UnparseableDateError;
pub use options::extract_options;
