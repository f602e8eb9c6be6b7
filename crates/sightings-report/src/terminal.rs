//! Terminal table container backed by comfy-table.

use std::fmt;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use sightings_model::{DisplayRow, Field};

use crate::renderer::TableView;

const INDEX_HEADER: &str = "#";

/// Renders rows as a terminal table.
#[derive(Debug, Clone, Default)]
pub struct TerminalTable {
    rows: Vec<DisplayRow>,
    header_color: Option<Color>,
    width: Option<u16>,
}

impl TerminalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the total table width instead of following the terminal.
    #[must_use]
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if let Some(width) = self.width {
            table.set_width(width);
        }
        let mut header = vec![self.header_cell(INDEX_HEADER)];
        let labels = Field::DISPLAY_ORDER.map(Field::label);
        header.extend(labels.map(|label| self.header_cell(label)));
        table.set_header(header);

        for row in &self.rows {
            let mut cells = vec![
                Cell::new(row.position)
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Right),
            ];
            for cell in &row.cells {
                let mut out = Cell::new(&cell.text);
                if cell.field == Field::DurationMinutes {
                    out = out.set_alignment(CellAlignment::Right);
                }
                cells.push(out);
            }
            if row.alternate {
                let grey = |cell: Cell| cell.bg(Color::DarkGrey);
                cells = cells.into_iter().map(grey).collect();
            }
            table.add_row(cells);
        }

        for (offset, field) in Field::DISPLAY_ORDER.into_iter().enumerate() {
            let Some(max_width) = self.column_max_width(field) else {
                continue;
            };
            if let Some(column) = table.column_mut(offset + 1) {
                let width = Width::Fixed(pixels_to_chars(max_width));
                column.set_constraint(ColumnConstraint::UpperBoundary(width));
            }
        }
        table
    }

    fn header_cell(&self, label: &str) -> Cell {
        let cell = Cell::new(label).add_attribute(Attribute::Bold);
        match self.header_color {
            Some(color) => cell.fg(color),
            None => cell,
        }
    }

    fn column_max_width(&self, field: Field) -> Option<u16> {
        self.rows
            .first()
            .and_then(|row| row.cell(field))
            .and_then(|cell| cell.max_width)
    }
}

impl TableView for TerminalTable {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: DisplayRow) {
        self.rows.push(row);
    }

    fn style_header(&mut self, color: &str) {
        self.header_color = Some(terminal_color(color));
    }
}

impl fmt::Display for TerminalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}

/// Approximate character width of a pixel width in a monospace terminal.
fn pixels_to_chars(pixels: u16) -> u16 {
    (u32::from(pixels) * 2 / 15).clamp(8, u32::from(u16::MAX)) as u16
}

fn terminal_color(name: &str) -> Color {
    match name.trim().to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "grey" | "gray" => Color::Grey,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_width_is_scaled_to_characters() {
        assert_eq!(pixels_to_chars(300), 40);
        assert_eq!(pixels_to_chars(10), 8);
    }

    #[test]
    fn unknown_colors_fall_back_to_white() {
        assert_eq!(terminal_color("White"), Color::White);
        assert_eq!(terminal_color("cyan"), Color::Cyan);
        assert_eq!(terminal_color("#fff"), Color::White);
    }
}
