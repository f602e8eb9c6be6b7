//! State of the filter form: dropdown selections and date inputs.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{Field, OptionSet, ViewOptions};

/// Control value that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("field '{0}' has no dropdown")]
    NotFilterable(Field),
    #[error("'{value}' is not an option for {field}")]
    UnknownOption { field: Field, value: String },
}

/// Current value of every control on the filter form.
///
/// Dropdown options are populated once from the full record set; a missing
/// selection is the placeholder and means "unconstrained".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    options: OptionSet,
    selections: BTreeMap<Field, String>,
    start: Option<String>,
    end: Option<String>,
}

impl FilterControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn populate(&mut self, options: OptionSet) {
        self.options = options;
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Select a dropdown value.
    ///
    /// The value is resolved against the field's options ignoring case, and
    /// the option's own spelling is stored so it matches canonical records.
    /// A blank value selects the placeholder.
    pub fn select(&mut self, field: Field, value: &str) -> Result<(), ControlError> {
        if !field.is_filterable() {
            return Err(ControlError::NotFilterable(field));
        }
        let wanted = value.trim();
        if wanted.is_empty() {
            self.selections.remove(&field);
            return Ok(());
        }
        let option = self
            .options
            .get(field)
            .iter()
            .find(|option| option.as_str() == wanted)
            .or_else(|| {
                self.options
                    .get(field)
                    .iter()
                    .find(|option| option.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| ControlError::UnknownOption {
                field,
                value: wanted.to_string(),
            })?;
        self.selections.insert(field, option.clone());
        Ok(())
    }

    pub fn unselect(&mut self, field: Field) {
        self.selections.remove(&field);
    }

    pub fn selection(&self, field: Field) -> Option<&str> {
        self.selections.get(&field).map(String::as_str)
    }

    pub fn set_start(&mut self, value: Option<String>) {
        self.start = value.filter(|value| !value.trim().is_empty());
    }

    pub fn set_end(&mut self, value: Option<String>) {
        self.end = value.filter(|value| !value.trim().is_empty());
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// Placeholder on every dropdown, default range on the date inputs.
    pub fn reset(&mut self, defaults: &ViewOptions) {
        self.selections.clear();
        self.start = Some(defaults.default_start.format("%Y-%m-%d").to_string());
        self.end = Some(defaults.default_end.format("%Y-%m-%d").to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> FilterControls {
        let mut values = BTreeMap::new();
        values.insert(Field::State, vec!["TX".to_string(), "CA".to_string()]);
        values.insert(Field::City, vec!["San Marcos".to_string()]);
        let mut controls = FilterControls::new();
        controls.populate(OptionSet::new(values));
        controls
    }

    #[test]
    fn selection_resolves_to_option_spelling() {
        let mut controls = controls();
        controls.select(Field::State, "tx").unwrap();
        assert_eq!(controls.selection(Field::State), Some("TX"));
        controls.select(Field::City, "san marcos").unwrap();
        assert_eq!(controls.selection(Field::City), Some("San Marcos"));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut controls = controls();
        let err = controls.select(Field::State, "NV").unwrap_err();
        assert_eq!(
            err,
            ControlError::UnknownOption {
                field: Field::State,
                value: "NV".to_string(),
            }
        );
        assert_eq!(
            controls.select(Field::Comments, "x"),
            Err(ControlError::NotFilterable(Field::Comments))
        );
    }

    #[test]
    fn blank_selection_is_placeholder() {
        let mut controls = controls();
        controls.select(Field::State, "TX").unwrap();
        controls.select(Field::State, "").unwrap();
        assert_eq!(controls.selection(Field::State), None);
    }

    #[test]
    fn reset_restores_default_range() {
        let mut controls = controls();
        controls.select(Field::State, "CA").unwrap();
        controls.set_start(Some("2010-01-05".to_string()));
        controls.reset(&ViewOptions::default());
        assert_eq!(controls.selection(Field::State), None);
        assert_eq!(controls.start(), Some("2010-01-01"));
        assert_eq!(controls.end(), Some("2010-01-13"));
    }
}
