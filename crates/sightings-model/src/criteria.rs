//! Filter criteria built from control state.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Field, InvalidDateRangeError};

/// Calendar date range, start inclusive and end exclusive.
///
/// Compared at day granularity, an end bound is naturally exclusive, so an
/// inclusive end picked by a user is advanced by one day before filtering.
/// [`DateRange::inclusive`] performs that adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Range with an already adjusted, exclusive end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRangeError> {
        if start > end {
            return Err(InvalidDateRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range from user-facing bounds where both ends are meant inclusively.
    pub fn inclusive(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRangeError> {
        if start > end {
            return Err(InvalidDateRangeError { start, end });
        }
        let adjusted = end.checked_add_days(Days::new(1)).unwrap_or(end);
        Self::new(start, adjusted)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Active constraints for one apply action.
///
/// A field without an entry is unconstrained. All entries and the date range
/// are combined conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    constraints: BTreeMap<Field, String>,
    date_range: Option<DateRange>,
}

impl FilterCriteria {
    pub fn all_unconstrained() -> Self {
        Self::default()
    }

    /// Constrain `field` to equal `value`. A blank value (the placeholder
    /// selection) leaves the field unconstrained.
    #[must_use]
    pub fn with_constraint(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set_constraint(field, Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn set_constraint(&mut self, field: Field, value: Option<String>) {
        match value {
            Some(value) if !value.trim().is_empty() => {
                self.constraints.insert(field, value);
            }
            _ => {
                self.constraints.remove(&field);
            }
        }
    }

    pub fn constraint(&self, field: Field) -> Option<&str> {
        self.constraints.get(&field).map(String::as_str)
    }

    pub fn constraints(&self) -> impl Iterator<Item = (Field, &str)> {
        self.constraints
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    pub fn date_range(&self) -> Option<&DateRange> {
        self.date_range.as_ref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty() && self.date_range.is_none()
    }
}
