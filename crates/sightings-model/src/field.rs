//! Record field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One field of a sighting record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Datetime,
    City,
    State,
    Country,
    Shape,
    DurationMinutes,
    Comments,
}

impl Field {
    /// Column order used when rendering a row.
    pub const DISPLAY_ORDER: [Field; 7] = [
        Field::Datetime,
        Field::City,
        Field::State,
        Field::Country,
        Field::Shape,
        Field::DurationMinutes,
        Field::Comments,
    ];

    /// Fields that have a dropdown control.
    pub const FILTERABLE: [Field; 4] = [Field::City, Field::State, Field::Country, Field::Shape];

    /// Key used in the JSON resource.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Datetime => "datetime",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::Shape => "shape",
            Self::DurationMinutes => "durationMinutes",
            Self::Comments => "comments",
        }
    }

    /// Column header text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Datetime => "Date",
            Self::City => "City",
            Self::State => "State",
            Self::Country => "Country",
            Self::Shape => "Shape",
            Self::DurationMinutes => "Duration (min)",
            Self::Comments => "Comments",
        }
    }

    #[must_use]
    pub fn is_filterable(self) -> bool {
        Self::FILTERABLE.contains(&self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::DISPLAY_ORDER
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(trimmed))
            .or_else(|| match trimmed.to_ascii_lowercase().as_str() {
                "date" => Some(Self::Datetime),
                "duration" => Some(Self::DurationMinutes),
                _ => None,
            })
            .ok_or_else(|| UnknownField(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_keys_case_insensitively() {
        let duration = "durationminutes".parse::<Field>();
        assert_eq!(duration, Ok(Field::DurationMinutes));
        assert_eq!("State".parse::<Field>(), Ok(Field::State));
        assert_eq!("date".parse::<Field>(), Ok(Field::Datetime));
        assert!("altitude".parse::<Field>().is_err());
    }

    #[test]
    fn only_categorical_fields_are_filterable() {
        assert!(Field::City.is_filterable());
        assert!(Field::Shape.is_filterable());
        assert!(!Field::Datetime.is_filterable());
        assert!(!Field::Comments.is_filterable());
    }
}
