//! Raw record normalization.

use serde_json::{Map, Number, Value};
use sightings_model::{Field, MalformedKind, MalformedRecordError, RawRecord, Sighting};
use tracing::{debug, info};

use crate::casing::{title_case, upper_case};

/// Normalize a batch of raw records, preserving length and order.
///
/// The first malformed record aborts the whole batch.
pub fn normalize(raw: &[RawRecord]) -> Result<Vec<Sighting>, MalformedRecordError> {
    let sightings = raw
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(index, record))
        .collect::<Result<Vec<_>, _>>()?;
    info!(record_count = sightings.len(), "normalized records");
    Ok(sightings)
}

/// Normalize one raw record. `index` is only used for error reporting.
pub fn normalize_record(index: usize, raw: &RawRecord) -> Result<Sighting, MalformedRecordError> {
    let Value::Object(object) = &raw.0 else {
        return Err(MalformedRecordError {
            index,
            field: None,
            kind: MalformedKind::NotAnObject,
        });
    };
    let reader = FieldReader { index, object };
    let sighting = Sighting {
        datetime: reader.text(Field::Datetime)?.to_string(),
        city: title_case(reader.text(Field::City)?),
        state: upper_case(reader.text(Field::State)?),
        country: upper_case(reader.text(Field::Country)?),
        shape: title_case(reader.text(Field::Shape)?),
        duration_minutes: reader.number(Field::DurationMinutes)?.clone(),
        comments: reader.text(Field::Comments)?.to_string(),
    };
    debug!(index, city = %sighting.city, shape = %sighting.shape, "normalized record");
    Ok(sighting)
}

struct FieldReader<'a> {
    index: usize,
    object: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    fn value(&self, field: Field) -> Result<&'a Value, MalformedRecordError> {
        self.object
            .get(field.key())
            .ok_or_else(|| self.error(field, MalformedKind::MissingField))
    }

    fn text(&self, field: Field) -> Result<&'a str, MalformedRecordError> {
        self.value(field)?
            .as_str()
            .ok_or_else(|| self.wrong_type(field, "string"))
    }

    fn number(&self, field: Field) -> Result<&'a Number, MalformedRecordError> {
        match self.value(field)? {
            Value::Number(number) => Ok(number),
            _ => Err(self.wrong_type(field, "number")),
        }
    }

    fn wrong_type(&self, field: Field, expected: &'static str) -> MalformedRecordError {
        self.error(field, MalformedKind::WrongType { expected })
    }

    fn error(&self, field: Field, kind: MalformedKind) -> MalformedRecordError {
        MalformedRecordError {
            index: self.index,
            field: Some(field),
            kind,
        }
    }
}
