//! Raw and canonical sighting records.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::Field;

/// One loosely-typed record as it appears in the JSON resource.
///
/// Shape is only checked when the record is normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.0.get(field.key())
    }

    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A normalized sighting.
///
/// `city`/`shape` are title-cased and `state`/`country` upper-cased; the other
/// fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sighting {
    pub datetime: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub shape: String,
    pub duration_minutes: Number,
    pub comments: String,
}

impl Sighting {
    /// Display text for a field, verbatim from the canonical value.
    pub fn text(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Datetime => Cow::Borrowed(self.datetime.as_str()),
            Field::City => Cow::Borrowed(self.city.as_str()),
            Field::State => Cow::Borrowed(self.state.as_str()),
            Field::Country => Cow::Borrowed(self.country.as_str()),
            Field::Shape => Cow::Borrowed(self.shape.as_str()),
            Field::DurationMinutes => Cow::Owned(self.duration_minutes.to_string()),
            Field::Comments => Cow::Borrowed(self.comments.as_str()),
        }
    }

    /// Value of a categorical (string) field; `None` for the duration.
    pub fn category(&self, field: Field) -> Option<&str> {
        match field {
            Field::Datetime => Some(self.datetime.as_str()),
            Field::City => Some(self.city.as_str()),
            Field::State => Some(self.state.as_str()),
            Field::Country => Some(self.country.as_str()),
            Field::Shape => Some(self.shape.as_str()),
            Field::Comments => Some(self.comments.as_str()),
            Field::DurationMinutes => None,
        }
    }

    /// Back to the loosely-typed form, e.g. to feed the normalizer again.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord(serde_json::to_value(self).unwrap_or(Value::Null))
    }
}
