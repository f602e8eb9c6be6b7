//! Dropdown option sets and view configuration.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DateRange, Field, InvalidDateRangeError};

/// Distinct values per filterable field, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    values: BTreeMap<Field, Vec<String>>,
}

impl OptionSet {
    pub fn new(values: BTreeMap<Field, Vec<String>>) -> Self {
        Self { values }
    }

    /// Options for a field; empty when the field was not requested.
    pub fn get(&self, field: Field) -> &[String] {
        self.values.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: Field, value: &str) -> bool {
        self.get(field).iter().any(|option| option == value)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.keys().copied()
    }
}

/// Presentation and reset defaults, loadable from a JSON config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ViewOptions {
    /// Location of the record resource.
    pub data_path: String,
    /// First day of the range restored by "clear".
    pub default_start: NaiveDate,
    /// Last day (inclusive) of the range restored by "clear".
    pub default_end: NaiveDate,
    /// Max width of the comments column, in pixels.
    pub comments_max_width: u16,
    /// Header text colour, applied once after the first render.
    pub header_color: String,
    /// CSS class for striped rows.
    pub alternate_row_class: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            data_path: "data.json".to_string(),
            default_start: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            default_end: NaiveDate::from_ymd_opt(2010, 1, 13).unwrap_or_default(),
            comments_max_width: 300,
            header_color: "white".to_string(),
            alternate_row_class: "has-background-grey".to_string(),
        }
    }
}

impl ViewOptions {
    /// The reset range with the end adjustment applied.
    pub fn default_range(&self) -> Result<DateRange, InvalidDateRangeError> {
        DateRange::inclusive(self.default_start, self.default_end)
    }
}
