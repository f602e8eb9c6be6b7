//! Loading and normalizing the sighting resource.
//!
//! The resource is a static JSON array of raw records. Loading happens once at
//! startup; the normalized set is the single source of truth afterwards.

pub mod casing;
pub mod error;
pub mod loader;
pub mod normalize;

pub use casing::{title_case, upper_case};
pub use error::{LoadError, Result};
pub use loader::{load_raw_records, load_sightings, parse_raw_records};
pub use normalize::{normalize, normalize_record};
