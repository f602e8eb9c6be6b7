//! Filter controller and CLI support for the sightings table.

pub mod controller;
pub mod logging;
pub mod session;
