//! Conjunctive filtering of the canonical record set.

use sightings_model::{DateRange, FilterCriteria, InvalidDateRangeError, Sighting};
use tracing::{debug, warn};

use crate::dates::parse_record_date;
use crate::error::UnparseableDateError;

/// Result of a filter pass, with the records excluded for unreadable dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport<'a> {
    pub records: Vec<&'a Sighting>,
    pub unparseable: Vec<UnparseableDateError>,
}

/// Filter `records`, returning a stable subsequence of those matching every
/// active constraint.
pub fn filter<'a>(
    records: &'a [Sighting],
    criteria: &FilterCriteria,
) -> Result<Vec<&'a Sighting>, InvalidDateRangeError> {
    filter_with_report(records, criteria).map(|report| report.records)
}

/// Like [`filter`], also reporting records whose dates could not be parsed.
///
/// A record with an unparseable `datetime` is dropped from the result only
/// when a date range is active; the rest of the batch is filtered normally.
pub fn filter_with_report<'a>(
    records: &'a [Sighting],
    criteria: &FilterCriteria,
) -> Result<FilterReport<'a>, InvalidDateRangeError> {
    let range = criteria.date_range().copied();
    if let Some(range) = range {
        check_range(range)?;
    }
    debug!(?criteria, record_count = records.len(), "filtering records");

    let mut retained = Vec::new();
    let mut unparseable = Vec::new();
    for (index, record) in records.iter().enumerate() {
        if !matches_categories(record, criteria) {
            continue;
        }
        if let Some(range) = range {
            match parse_record_date(&record.datetime) {
                Some(date) if range.contains(date) => {}
                Some(_) => continue,
                None => {
                    unparseable.push(UnparseableDateError {
                        index,
                        value: record.datetime.clone(),
                    });
                    continue;
                }
            }
        }
        retained.push(record);
    }

    if !unparseable.is_empty() {
        warn!(
            excluded = unparseable.len(),
            "records with unparseable dates excluded from filter result"
        );
    }
    debug!(retained = retained.len(), "filter complete");
    Ok(FilterReport {
        records: retained,
        unparseable,
    })
}

fn check_range(range: DateRange) -> Result<(), InvalidDateRangeError> {
    if range.start() > range.end() {
        return Err(InvalidDateRangeError {
            start: range.start(),
            end: range.end(),
        });
    }
    Ok(())
}

fn matches_categories(record: &Sighting, criteria: &FilterCriteria) -> bool {
    criteria
        .constraints()
        .all(|(field, expected)| record.category(field) == Some(expected))
}
