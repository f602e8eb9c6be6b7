//! Filter controller: turns form events into filter passes and re-renders.
//!
//! The controller borrows the canonical record set for its whole life and
//! never replaces it. Events are handled one at a time, each running to
//! completion, so a render always reflects the latest event.

use chrono::NaiveDate;
use sightings_filter::{extract_options, filter_with_report, parse_control_date};
use sightings_model::{
    DateRange, Field, FilterControls, FilterCriteria, InvalidDateRangeError, Sighting, ViewOptions,
};
use sightings_report::{TableRenderer, TableView};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::logging::redact_value;

/// User-triggered form events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Form submit: filter with the current control values.
    Apply,
    /// Form reset: restore defaults and show every record.
    Clear,
}

/// What an event did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOutcome {
    /// Rows now installed in the view.
    pub rows: usize,
    /// Records left out because their date could not be parsed.
    pub excluded: usize,
    /// The form's own submit/reset navigation was suppressed.
    pub default_prevented: bool,
}

/// An event that could not be applied. The view is left as it was.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    InvalidDateRange(#[from] InvalidDateRangeError),
    #[error("{control} is not a valid date: '{value}'")]
    BadControlDate {
        control: &'static str,
        value: String,
    },
}

pub struct FilterController<'a, V> {
    records: &'a [Sighting],
    renderer: TableRenderer,
    view: V,
    options: ViewOptions,
}

impl<'a, V: TableView> FilterController<'a, V> {
    pub fn new(records: &'a [Sighting], view: V, options: &ViewOptions) -> Self {
        Self {
            records,
            renderer: TableRenderer::new(options),
            view,
            options: options.clone(),
        }
    }

    /// Populate the dropdowns, set the default dates and render every record.
    pub fn startup(&mut self, controls: &mut FilterControls) -> usize {
        controls.populate(extract_options(self.records, &Field::FILTERABLE));
        controls.reset(&self.options);
        let rows = self.renderer.render(&mut self.view, self.records);
        info!(row_count = rows, "initial render");
        rows
    }

    pub fn handle(
        &mut self,
        event: FormEvent,
        controls: &mut FilterControls,
    ) -> Result<EventOutcome, ControllerError> {
        debug!(?event, "handling form event");
        match event {
            FormEvent::Apply => self.apply(controls),
            FormEvent::Clear => Ok(self.clear(controls)),
        }
    }

    /// Criteria for the current control values, with the end date adjusted
    /// to be inclusive. Missing dates fall back to the default range.
    pub fn criteria(&self, controls: &FilterControls) -> Result<FilterCriteria, ControllerError> {
        let mut criteria = FilterCriteria::all_unconstrained();
        for field in Field::FILTERABLE {
            criteria.set_constraint(field, controls.selection(field).map(str::to_string));
        }
        let start = control_date("start date", controls.start())?;
        let end = control_date("end date", controls.end())?;
        let range = DateRange::inclusive(
            start.unwrap_or(self.options.default_start),
            end.unwrap_or(self.options.default_end),
        )?;
        Ok(criteria.with_date_range(range))
    }

    fn apply(&mut self, controls: &FilterControls) -> Result<EventOutcome, ControllerError> {
        let criteria = self.criteria(controls).inspect_err(|error| {
            warn!(%error, "filter not applied");
        })?;
        let report = filter_with_report(self.records, &criteria)?;
        for skipped in &report.unparseable {
            debug!(index = skipped.index, value = %skipped.value, "excluded record");
        }
        for record in &report.records {
            trace!(
                datetime = %record.datetime,
                comments = %redact_value(&record.comments),
                "visible record"
            );
        }
        let visible = report.records.iter().copied();
        let rows = self.renderer.render(&mut self.view, visible);
        let excluded = report.unparseable.len();
        info!(row_count = rows, excluded, "filters applied");
        Ok(EventOutcome {
            rows,
            excluded,
            default_prevented: true,
        })
    }

    fn clear(&mut self, controls: &mut FilterControls) -> EventOutcome {
        controls.reset(&self.options);
        let rows = self.renderer.render(&mut self.view, self.records);
        info!(row_count = rows, "filters cleared");
        EventOutcome {
            rows,
            excluded: 0,
            default_prevented: true,
        }
    }

    pub fn records(&self) -> &'a [Sighting] {
        self.records
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

fn control_date(
    control: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ControllerError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match parse_control_date(value) {
        Some(date) => Ok(Some(date)),
        None => Err(ControllerError::BadControlDate {
            control,
            value: value.to_string(),
        }),
    }
}
