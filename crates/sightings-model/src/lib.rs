//! Data model for the sightings table.
//!
//! Raw records come from a static JSON resource; everything downstream works
//! on the canonical [`Sighting`] form produced by the normalizer.

pub mod controls;
pub mod criteria;
pub mod display;
pub mod error;
pub mod field;
pub mod options;
pub mod record;

pub use controls::{ControlError, FilterControls};
pub use criteria::{DateRange, FilterCriteria};
pub use display::{DisplayCell, DisplayRow};
pub use error::{InvalidDateRangeError, MalformedKind, MalformedRecordError};
pub use field::{Field, UnknownField};
pub use options::{OptionSet, ViewOptions};
pub use record::{RawRecord, Sighting};
