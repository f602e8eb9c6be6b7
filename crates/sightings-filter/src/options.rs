//! Dropdown option extraction.

use std::collections::{BTreeMap, HashSet};

use sightings_model::{Field, OptionSet, Sighting};
use tracing::debug;

/// Collect the distinct values of each requested field.
///
/// Values keep first-appearance order; duplicates are dropped by exact string
/// equality. Records are already normalized, so this also folds values that
/// only differed in casing in the raw data.
pub fn extract_options(records: &[Sighting], fields: &[Field]) -> OptionSet {
    let mut values = BTreeMap::new();
    for &field in fields {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for record in records {
            let text = record.text(field);
            if seen.insert(text.clone()) {
                options.push(text.into_owned());
            }
        }
        debug!(field = %field, option_count = options.len(), "extracted options");
        values.insert(field, options);
    }
    OptionSet::new(values)
}
