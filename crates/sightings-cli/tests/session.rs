//! Scripted form sessions.

use std::io::Cursor;

use serde_json::json;
use sightings_cli::controller::FilterController;
use sightings_cli::session::run_session;
use sightings_ingest::normalize;
use sightings_model::{FilterControls, RawRecord, Sighting, ViewOptions};
use sightings_report::TerminalTable;

fn records() -> Vec<Sighting> {
    let raw: Vec<RawRecord> = [
        ("1/1/2010", "benton", "ar", "circle"),
        ("1/3/2010", "san marcos", "tx", "fireball"),
        ("1/5/2010", "el cajon", "ca", "light"),
    ]
    .into_iter()
    .map(|(datetime, city, state, shape)| {
        RawRecord::new(json!({
            "datetime": datetime,
            "city": city,
            "state": state,
            "country": "us",
            "shape": shape,
            "durationMinutes": 10,
            "comments": "seen from the highway"
        }))
    })
    .collect();
    normalize(&raw).expect("normalize")
}

/// Start a wide terminal table over `records` and feed it `script`.
fn run_over(records: &[Sighting], script: &str) -> String {
    let view = TerminalTable::new().with_width(160);
    let mut controller = FilterController::new(records, view, &ViewOptions::default());
    let mut controls = FilterControls::new();
    controller.startup(&mut controls);
    let mut output = Vec::new();
    let input = Cursor::new(script);
    run_session(&mut controller, &mut controls, input, &mut output).expect("run session");
    String::from_utf8(output).expect("utf-8 output")
}

fn run(script: &str) -> String {
    run_over(&records(), script)
}

fn row_counts(output: &str) -> Vec<&str> {
    output.lines().filter(|l| l.ends_with(" rows")).collect()
}

#[test]
fn apply_then_clear() {
    let output = run("select state TX\napply\nclear\nquit\napply\n");
    assert_eq!(row_counts(&output), ["1 rows", "3 rows"]);
    assert!(output.contains("Fireball"));
}

#[test]
fn errors_are_reported_and_session_continues() {
    let script = "select state NV\nteleport\nstart 2010-01-09\nend 2010-01-02\napply\nend\napply\n";
    let output = run(script);
    assert!(output.contains("error: 'NV' is not an option for state"));
    assert!(output.contains("error: unknown command 'teleport'"));
    let rejected = "error: start date 2010-01-09 is after end date 2010-01-02";
    assert!(output.contains(rejected));
    assert!(output.contains("0 rows"));
}

#[test]
fn options_are_listed() {
    let output = run("options\n");
    assert!(output.contains("San Marcos"));
    assert!(output.contains("AR, TX, CA"));
}

#[test]
fn session_over_loaded_resource() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"[
  {"datetime": "1/10/2010", "city": "fresno", "state": "ca", "country": "us",
   "shape": "oval", "durationMinutes": 2, "comments": "hovered"},
  {"datetime": "1/11/2010", "city": "austin", "state": "tx", "country": "us",
   "shape": "oval", "durationMinutes": 1.5, "comments": "zig-zag"}
]"#,
    )
    .expect("write resource");
    let records = sightings_ingest::load_sightings(&path).expect("load");

    let output = run_over(&records, "select city austin\napply\n");
    assert!(output.contains("Austin"));
    assert!(!output.contains("Fresno"));
    assert!(output.ends_with("1 rows\n"));
}
