//! Integration tests for table rendering.

use serde_json::Number;
use sightings_model::{Field, FilterControls, OptionSet, Sighting, ViewOptions};
use sightings_report::{HtmlPage, MemoryTable, TableRenderer, TerminalTable};

fn sighting(
    datetime: &str,
    city: &str,
    state: &str,
    shape: &str,
    minutes: Number,
    comments: &str,
) -> Sighting {
    Sighting {
        datetime: datetime.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        country: "US".to_string(),
        shape: shape.to_string(),
        duration_minutes: minutes,
        comments: comments.to_string(),
    }
}

fn records() -> Vec<Sighting> {
    vec![
        sighting(
            "1/1/2010",
            "Benton",
            "AR",
            "Circle",
            Number::from(5),
            "4 bright green circles",
        ),
        sighting(
            "1/2/2010",
            "El Cajon",
            "CA",
            "Light",
            Number::from_f64(2.5).unwrap(),
            "Lights in the sky",
        ),
        sighting(
            "1/3/2010",
            "Aurora",
            "CO",
            "Triangle",
            Number::from(1),
            "<b>hovering</b> & silent",
        ),
    ]
}

#[test]
fn renders_rows_in_input_order() {
    let mut renderer = TableRenderer::new(&ViewOptions::default());
    let mut view = MemoryTable::new();
    let records = records();
    let count = renderer.render(&mut view, &records);
    assert_eq!(count, 3);
    insta::assert_snapshot!(view.to_text().trim_end(), @r"
    1* | 1/1/2010 | Benton | AR | US | Circle | 5 | 4 bright green circles
    2 | 1/2/2010 | El Cajon | CA | US | Light | 2.5 | Lights in the sky
    3* | 1/3/2010 | Aurora | CO | US | Triangle | 1 | <b>hovering</b> & silent
    ");
}

#[test]
fn every_render_replaces_previous_rows() {
    let mut renderer = TableRenderer::new(&ViewOptions::default());
    let mut view = MemoryTable::new();
    let records = records();
    renderer.render(&mut view, &records);
    renderer.render(&mut view, records.iter().skip(1));
    assert_eq!(view.clear_count(), 2);
    let positions: Vec<usize> = view.rows().iter().map(|row| row.position).collect();
    assert_eq!(positions, [1, 2]);
    let first = view.rows()[0].cell(Field::City).unwrap();
    assert_eq!(first.text, "El Cajon");
    assert!(view.rows()[0].alternate);

    renderer.render(&mut view, std::iter::empty::<&Sighting>());
    assert!(view.rows().is_empty());
}

#[test]
fn terminal_table_has_header_and_rows() {
    let mut renderer = TableRenderer::new(&ViewOptions::default());
    let mut view = TerminalTable::new().with_width(160);
    renderer.render(&mut view, &records());
    assert_eq!(view.row_count(), 3);
    let text = view.to_string();
    assert!(text.contains("Duration (min)"));
    assert!(text.contains("El Cajon"));
    assert!(text.contains("2.5"));
}

#[test]
fn html_page_marks_striped_rows_and_comment_width() {
    let options = ViewOptions::default();
    let mut renderer = TableRenderer::new(&options);
    let mut page = HtmlPage::new(&options);
    renderer.render(&mut page, &records());
    let html = page.to_html().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("class=\"has-background-grey\"").count(), 2);
    assert_eq!(html.matches("max-width: 300px").count(), 3);
    assert_eq!(html.matches("style=\"color: white\"").count(), 8);
    assert!(html.contains("&lt;b&gt;hovering&lt;/b&gt; &amp; silent"));
    assert_eq!(page.row_count(), 3);
}

#[test]
fn html_page_shows_controls() {
    let options = ViewOptions::default();
    let records = records();
    let mut values = std::collections::BTreeMap::new();
    let states = vec!["AR".to_string(), "CA".to_string(), "CO".to_string()];
    values.insert(Field::State, states);
    let mut controls = FilterControls::new();
    controls.populate(OptionSet::new(values));
    controls.reset(&options);
    controls.select(Field::State, "ca").unwrap();

    let mut renderer = TableRenderer::new(&options);
    let mut page = HtmlPage::new(&options);
    page.set_controls(&controls);
    renderer.render(&mut page, &records[1..2]);
    let html = page.to_html().unwrap();

    let selected = r#"<option value="CA" selected="selected">CA</option>"#;
    assert!(html.contains(selected));
    assert!(html.contains(r#"<option value="AR">AR</option>"#));
    assert!(html.contains(r#"value="2010-01-01""#));
    assert!(html.contains(r#"id="applyFilters""#));
}

#[test]
fn html_page_writes_to_disk() {
    let options = ViewOptions::default();
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("index.html");
    let page = HtmlPage::new(&options);
    page.write_to(&path).expect("write page");
    let contents = std::fs::read_to_string(&path).expect("read page");
    assert!(contents.contains("<tbody id=\"tbody\">"));
}
