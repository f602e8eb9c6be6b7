use serde::Serialize;

use crate::Field;

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCell {
    pub field: Field,
    pub text: String,
    /// Width cap in pixels; only set on columns that ask for one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u16>,
}

/// One row of the visible table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// 1-based position within the rendered subset.
    pub position: usize,
    pub cells: Vec<DisplayCell>,
    /// Alternate (striped) treatment, set on even 0-based positions.
    pub alternate: bool,
}

impl DisplayRow {
    pub fn cell(&self, field: Field) -> Option<&DisplayCell> {
        self.cells.iter().find(|cell| cell.field == field)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.text.as_str())
    }
}
