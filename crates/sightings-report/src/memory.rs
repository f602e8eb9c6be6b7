//! In-memory table container.

use sightings_model::DisplayRow;

use crate::renderer::TableView;

/// Keeps rendered rows in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    rows: Vec<DisplayRow>,
    header_color: Option<String>,
    header_style_count: usize,
    clear_count: usize,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<DisplayRow> {
        self.rows
    }

    pub fn header_color(&self) -> Option<&str> {
        self.header_color.as_deref()
    }

    pub fn header_style_count(&self) -> usize {
        self.header_style_count
    }

    /// Number of times the rows were cleared (one per render).
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Plain-text dump, one line per row; striped rows are marked with `*`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.position.to_string());
            if row.alternate {
                out.push('*');
            }
            for text in row.texts() {
                out.push_str(" | ");
                out.push_str(text);
            }
            out.push('\n');
        }
        out
    }
}

impl TableView for MemoryTable {
    fn clear_rows(&mut self) {
        self.rows.clear();
        self.clear_count += 1;
    }

    fn append_row(&mut self, row: DisplayRow) {
        self.rows.push(row);
    }

    fn style_header(&mut self, color: &str) {
        self.header_color = Some(color.to_string());
        self.header_style_count += 1;
    }
}
