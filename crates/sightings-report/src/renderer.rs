use sightings_model::{DisplayCell, DisplayRow, Field, Sighting, ViewOptions};
use tracing::{debug, trace};

/// A container that displays table rows.
pub trait TableView {
    /// Remove every previously installed row.
    fn clear_rows(&mut self);

    /// Append one row after the existing ones.
    fn append_row(&mut self, row: DisplayRow);

    /// Apply the header text colour.
    fn style_header(&mut self, color: &str);
}

/// Builds display rows and installs them into a [`TableView`].
#[derive(Debug, Clone)]
pub struct TableRenderer {
    comments_max_width: u16,
    header_color: String,
    header_styled: bool,
}

impl TableRenderer {
    pub fn new(options: &ViewOptions) -> Self {
        Self {
            comments_max_width: options.comments_max_width,
            header_color: options.header_color.clone(),
            header_styled: false,
        }
    }

    /// Build the row for the record at 0-based `index` of the rendered subset.
    pub fn build_row(&self, index: usize, record: &Sighting) -> DisplayRow {
        let cells = Field::DISPLAY_ORDER
            .into_iter()
            .map(|field| DisplayCell {
                field,
                text: record.text(field).into_owned(),
                max_width: (field == Field::Comments).then_some(self.comments_max_width),
            })
            .collect();
        DisplayRow {
            position: index + 1,
            cells,
            alternate: index.is_multiple_of(2),
        }
    }

    /// Replace the view's rows with one row per record, in order.
    ///
    /// The header is styled once, after the first render. Returns the number
    /// of rows installed.
    pub fn render<'a, V, I>(&mut self, view: &mut V, records: I) -> usize
    where
        V: TableView + ?Sized,
        I: IntoIterator<Item = &'a Sighting>,
    {
        view.clear_rows();
        let mut count = 0;
        for (index, record) in records.into_iter().enumerate() {
            let row = self.build_row(index, record);
            trace!(position = row.position, datetime = %record.datetime, "append row");
            view.append_row(row);
            count += 1;
        }
        if !self.header_styled {
            view.style_header(&self.header_color);
            self.header_styled = true;
        }
        debug!(row_count = count, "rendered table");
        count
    }

    pub fn header_styled(&self) -> bool {
        self.header_styled
    }
}
