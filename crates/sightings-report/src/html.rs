//! HTML page container: filter form plus the sightings table.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use sightings_model::{DisplayRow, Field, FilterControls, ViewOptions};
use tracing::info;

use crate::renderer::TableView;

const PAGE_TITLE: &str = "UFO Sightings";
const PLACEHOLDER_LABEL: &str = "All";

/// A complete HTML document holding the filter controls and the table body.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    alternate_row_class: String,
    controls: FilterControls,
    rows: Vec<DisplayRow>,
    header_color: Option<String>,
}

impl HtmlPage {
    pub fn new(options: &ViewOptions) -> Self {
        Self {
            alternate_row_class: options.alternate_row_class.clone(),
            controls: FilterControls::new(),
            rows: Vec::new(),
            header_color: None,
        }
    }

    /// Snapshot the form state shown above the table.
    pub fn set_controls(&mut self, controls: &FilterControls) {
        self.controls = controls.clone();
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn to_html(&self) -> Result<String> {
        let mut buffer = b"<!DOCTYPE html>\n".to_vec();
        let mut xml = Writer::new_with_indent(&mut buffer, b' ', 2);
        let root = tag("html", &[("lang", "en")]);
        xml.write_event(Event::Start(root))?;
        self.write_head(&mut xml)?;
        xml.write_event(Event::Start(BytesStart::new("body")))?;
        text_element(&mut xml, BytesStart::new("h1"), PAGE_TITLE)?;
        self.write_form(&mut xml)?;
        self.write_table(&mut xml)?;
        xml.write_event(Event::End(BytesEnd::new("body")))?;
        xml.write_event(Event::End(BytesEnd::new("html")))?;
        buffer.push(b'\n');
        String::from_utf8(buffer).context("html output is not utf-8")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let html = self.to_html()?;
        fs::write(path, html)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), row_count = self.rows.len(), "wrote html page");
        Ok(())
    }

    fn write_head<W: Write>(&self, xml: &mut Writer<W>) -> Result<()> {
        xml.write_event(Event::Start(BytesStart::new("head")))?;
        let meta = tag("meta", &[("charset", "utf-8")]);
        xml.write_event(Event::Empty(meta))?;
        text_element(xml, BytesStart::new("title"), PAGE_TITLE)?;
        let css = format!(
            ".{} {{ background-color: #7a7a7a; }} thead {{ background-color: #363636; }}",
            self.alternate_row_class
        );
        text_element(xml, BytesStart::new("style"), &css)?;
        xml.write_event(Event::End(BytesEnd::new("head")))?;
        Ok(())
    }

    fn write_form<W: Write>(&self, xml: &mut Writer<W>) -> Result<()> {
        let form = tag("form", &[("id", "filters")]);
        xml.write_event(Event::Start(form))?;
        for field in Field::FILTERABLE {
            let label = tag("label", &[("for", field.key())]);
            text_element(xml, label, field.label())?;
            let key = field.key();
            let select = tag("select", &[("id", key), ("name", key)]);
            xml.write_event(Event::Start(select))?;
            let selected = self.controls.selection(field);
            let placeholder = tag("option", &[("value", "")]);
            text_element(xml, placeholder, PLACEHOLDER_LABEL)?;
            for value in self.controls.options().get(field) {
                let mut option = tag("option", &[("value", value.as_str())]);
                if selected == Some(value.as_str()) {
                    option.push_attribute(("selected", "selected"));
                }
                text_element(xml, option, value)?;
            }
            xml.write_event(Event::End(BytesEnd::new("select")))?;
        }
        for (id, label, value) in [
            ("startDate", "Start date", self.controls.start()),
            ("endDate", "End date", self.controls.end()),
        ] {
            text_element(xml, tag("label", &[("for", id)]), label)?;
            let mut input = tag("input", &[("type", "date"), ("id", id), ("name", id)]);
            if let Some(value) = value {
                input.push_attribute(("value", value));
            }
            xml.write_event(Event::Empty(input))?;
        }
        let apply = tag("button", &[("type", "submit"), ("id", "applyFilters")]);
        text_element(xml, apply, "Apply")?;
        let clear = tag("button", &[("type", "reset"), ("id", "clearFilters")]);
        text_element(xml, clear, "Clear")?;
        xml.write_event(Event::End(BytesEnd::new("form")))?;
        Ok(())
    }

    fn write_table<W: Write>(&self, xml: &mut Writer<W>) -> Result<()> {
        xml.write_event(Event::Start(BytesStart::new("table")))?;
        xml.write_event(Event::Start(BytesStart::new("thead")))?;
        xml.write_event(Event::Start(BytesStart::new("tr")))?;
        let header_style = self.header_color.as_ref().map(|c| format!("color: {c}"));
        for label in std::iter::once("#").chain(Field::DISPLAY_ORDER.map(Field::label)) {
            let mut th = BytesStart::new("th");
            if let Some(style) = &header_style {
                th.push_attribute(("style", style.as_str()));
            }
            text_element(xml, th, label)?;
        }
        xml.write_event(Event::End(BytesEnd::new("tr")))?;
        xml.write_event(Event::End(BytesEnd::new("thead")))?;

        let tbody = tag("tbody", &[("id", "tbody")]);
        xml.write_event(Event::Start(tbody))?;
        for row in &self.rows {
            let mut tr = BytesStart::new("tr");
            if row.alternate {
                tr.push_attribute(("class", self.alternate_row_class.as_str()));
            }
            xml.write_event(Event::Start(tr))?;
            text_element(xml, BytesStart::new("th"), &row.position.to_string())?;
            for cell in &row.cells {
                let mut td = BytesStart::new("td");
                let style = cell.max_width.map(|width| format!("max-width: {width}px"));
                if let Some(style) = &style {
                    td.push_attribute(("style", style.as_str()));
                }
                text_element(xml, td, &cell.text)?;
            }
            xml.write_event(Event::End(BytesEnd::new("tr")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("tbody")))?;
        xml.write_event(Event::End(BytesEnd::new("table")))?;
        Ok(())
    }
}

impl TableView for HtmlPage {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: DisplayRow) {
        self.rows.push(row);
    }

    fn style_header(&mut self, color: &str) {
        self.header_color = Some(color.to_string());
    }
}

fn tag<'a>(name: &'a str, attributes: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    BytesStart::new(name).with_attributes(attributes.iter().copied())
}

/// Write `<tag>text</tag>`, keeping the start tag's attributes.
fn text_element<W: Write>(xml: &mut Writer<W>, start: BytesStart<'_>, text: &str) -> Result<()> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
