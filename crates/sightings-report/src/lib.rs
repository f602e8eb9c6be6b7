//! Rendering the visible row set into a table container.
//!
//! [`TableRenderer`] turns canonical records into [`DisplayRow`]s and installs
//! them into a [`TableView`]. Every render clears the view and rebuilds it;
//! nothing is diffed against the previous render.
//!
//! [`DisplayRow`]: sightings_model::DisplayRow

pub mod html;
pub mod memory;
pub mod renderer;
pub mod terminal;

pub use html::HtmlPage;
pub use memory::MemoryTable;
pub use renderer::{TableRenderer, TableView};
pub use terminal::TerminalTable;
