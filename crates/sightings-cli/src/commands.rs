use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use sightings_cli::controller::{FilterController, FormEvent};
use sightings_cli::session::{self, options_table};
use sightings_filter::extract_options;
use sightings_ingest::load_sightings;
use sightings_model::{Field, FilterControls, Sighting, ViewOptions};
use sightings_report::{HtmlPage, MemoryTable, TableView, TerminalTable};
use tracing::{error, info};

use crate::cli::{DataArgs, OptionsArgs, OutputFormatArg, SessionArgs, ShowArgs};

/// View options from `--config`, or the defaults.
pub fn load_view_options(path: Option<&Path>) -> Result<ViewOptions> {
    let Some(path) = path else {
        return Ok(ViewOptions::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let options = serde_json::from_str(&contents)
        .with_context(|| format!("parse config {}", path.display()))?;
    info!(path = %path.display(), "loaded view options");
    Ok(options)
}

pub fn run_show(args: &ShowArgs, options: &ViewOptions) -> Result<()> {
    let records = load_records(&args.data, options)?;
    let output = args.output.as_deref();
    match args.format {
        OutputFormatArg::Table => {
            let (view, _) = show_with(&records, TerminalTable::new(), args, options)?;
            emit(output, &format!("{view}\n"))
        }
        OutputFormatArg::Json => {
            let (view, _) = show_with(&records, MemoryTable::new(), args, options)?;
            let json = serde_json::to_string_pretty(view.rows())?;
            emit(output, &format!("{json}\n"))
        }
        OutputFormatArg::Html => {
            let page = HtmlPage::new(options);
            let (mut page, controls) = show_with(&records, page, args, options)?;
            page.set_controls(&controls);
            match output {
                Some(path) => page.write_to(path),
                None => emit(None, &page.to_html()?),
            }
        }
    }
}

/// Start a controller on `view`, then fire apply if any filter was given.
fn show_with<V: TableView>(
    records: &[Sighting],
    view: V,
    args: &ShowArgs,
    options: &ViewOptions,
) -> Result<(V, FilterControls)> {
    let mut controls = FilterControls::new();
    let mut controller = FilterController::new(records, view, options);
    controller.startup(&mut controls);
    if !args.has_filters() {
        return Ok((controller.into_view(), controls));
    }
    let selections = [
        (Field::City, &args.city),
        (Field::State, &args.state),
        (Field::Country, &args.country),
        (Field::Shape, &args.shape),
    ];
    for (field, value) in selections {
        if let Some(value) = value {
            controls.select(field, value)?;
        }
    }
    if args.start.is_some() {
        controls.set_start(args.start.clone());
    }
    if args.end.is_some() {
        controls.set_end(args.end.clone());
    }
    let outcome = controller.handle(FormEvent::Apply, &mut controls)?;
    if outcome.excluded > 0 {
        let excluded = outcome.excluded;
        eprintln!("note: {excluded} records excluded because their date could not be parsed");
    }
    Ok((controller.into_view(), controls))
}

pub fn run_options(args: &OptionsArgs, options: &ViewOptions) -> Result<()> {
    let fields = dropdown_fields(args.field.as_deref())?;
    let records = load_records(&args.data, options)?;
    let set = extract_options(&records, &fields);
    println!("{}", options_table(&set));
    Ok(())
}

/// Fields to list options for. Only fields with a dropdown qualify.
fn dropdown_fields(name: Option<&str>) -> Result<Vec<Field>> {
    let Some(name) = name else {
        return Ok(Field::FILTERABLE.to_vec());
    };
    let field: Field = name.parse()?;
    if !field.is_filterable() {
        bail!("{field} has no dropdown");
    }
    Ok(vec![field])
}

pub fn run_session(args: &SessionArgs, options: &ViewOptions) -> Result<()> {
    // A failed load leaves the table empty; the session still accepts events.
    let records = load_records(&args.data, options).unwrap_or_else(|error| {
        error!("failed to load sightings: {error:#}");
        eprintln!("error: {error:#}");
        Vec::new()
    });
    let mut controls = FilterControls::new();
    let view = TerminalTable::new();
    let mut controller = FilterController::new(&records, view, options);
    let rows = controller.startup(&mut controls);
    let mut out = io::stdout().lock();
    writeln!(out, "{}", controller.view())?;
    writeln!(out, "{rows} rows")?;
    let input = io::stdin().lock();
    session::run_session(&mut controller, &mut controls, input, &mut out)?;
    Ok(())
}

fn load_records(data: &DataArgs, options: &ViewOptions) -> Result<Vec<Sighting>> {
    let path = match &data.data {
        Some(path) => path.clone(),
        None => PathBuf::from(&options.data_path),
    };
    load_sightings(&path).context("load sightings")
}

fn emit(output: Option<&Path>, contents: &str) -> Result<()> {
    let Some(path) = output else {
        io::stdout().write_all(contents.as_bytes())?;
        return Ok(());
    };
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::iter;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};

    const RESOURCE: &str = r#"[
  {"datetime": "1/1/2010", "city": "benton", "state": "ar", "country": "us",
   "shape": "circle", "durationMinutes": 5, "comments": "green lights"},
  {"datetime": "1/12/2010", "city": "el cajon", "state": "ca", "country": "us",
   "shape": "light", "durationMinutes": 2.5, "comments": "hovered"},
  {"datetime": "sometime", "city": "benton", "state": "ar", "country": "us",
   "shape": "disk", "durationMinutes": 1, "comments": "no date"}
]"#;

    fn resource(dir: &Path) -> String {
        let path = dir.join("data.json");
        fs::write(&path, RESOURCE).expect("write resource");
        path.to_string_lossy().into_owned()
    }

    /// Parse a command line; temp paths never contain whitespace.
    fn parse(line: &str) -> Command {
        let argv = iter::once("sightings").chain(line.split_whitespace());
        Cli::try_parse_from(argv).expect("parse arguments").command
    }

    fn show_args(line: &str) -> ShowArgs {
        match parse(line) {
            Command::Show(args) => args,
            _ => panic!("expected the show command"),
        }
    }

    fn show(line: &str) -> Result<(MemoryTable, FilterControls)> {
        let args = show_args(line);
        let options = ViewOptions::default();
        let records = load_records(&args.data, &options).expect("load records");
        show_with(&records, MemoryTable::new(), &args, &options)
    }

    #[test]
    fn defaults_without_config() {
        let options = load_view_options(None).expect("default options");
        assert_eq!(options, ViewOptions::default());
    }

    #[test]
    fn partial_config_is_merged_with_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("view.json");
        let config = r#"{"default_end": "2010-01-31", "header_color": "cyan"}"#;
        fs::write(&path, config).expect("write config");

        let options = load_view_options(Some(&path)).expect("load config");
        assert_eq!(options.default_end.to_string(), "2010-01-31");
        assert_eq!(options.header_color, "cyan");
        assert_eq!(options.default_start.to_string(), "2010-01-01");
        assert_eq!(options.comments_max_width, 300);
    }

    #[test]
    fn broken_config_is_reported() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("view.json");
        fs::write(&path, "{\"default_end\": ").expect("write config");
        let err = load_view_options(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").starts_with("parse config"));
    }

    #[test]
    fn show_without_filters_lists_every_record() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data = resource(dir.path());
        let (view, controls) = show(&format!("show {data}")).unwrap();
        assert_eq!(view.rows().len(), 3);
        assert_eq!(controls.start(), Some("2010-01-01"));
    }

    #[test]
    fn show_applies_selection_and_dates() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data = resource(dir.path());
        let line = format!("show {data} --state ar --end 2010-01-31");
        let (view, controls) = show(&line).unwrap();

        assert_eq!(view.rows().len(), 1);
        let city = view.rows()[0].cell(Field::City).unwrap();
        assert_eq!(city.text, "Benton");
        assert_eq!(controls.selection(Field::State), Some("AR"));
        assert_eq!(controls.end(), Some("2010-01-31"));
    }

    #[test]
    fn show_rejects_reversed_range_and_unknown_option() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data = resource(dir.path());
        let line = format!("show {data} --start 2010-01-10 --end 2010-01-02");
        let err = show(&line).unwrap_err();
        assert!(err.to_string().contains("is after end date"));

        let err = show(&format!("show {data} --state nv")).unwrap_err();
        assert_eq!(err.to_string(), "'nv' is not an option for state");
    }

    #[test]
    fn missing_resource_fails_once_with_os_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("nope.json");
        let args = show_args(&format!("show {}", missing.display()));

        let err = run_show(&args, &ViewOptions::default()).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.starts_with("load sightings: failed to read"));
        assert_eq!(chain.matches("(os error").count(), 1);
    }

    #[test]
    fn json_output_holds_filtered_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data = resource(dir.path());
        let out = dir.path().join("rows.json");
        let out_arg = out.display();
        let line = format!("show {data} --shape light --format json -o {out_arg}");
        run_show(&show_args(&line), &ViewOptions::default()).expect("show json");

        let written = fs::read_to_string(&out).expect("read output");
        let rows: serde_json::Value = serde_json::from_str(&written).unwrap();
        let rows = rows.as_array().expect("array of rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["position"], 1);
        assert_eq!(rows[0]["cells"][1]["text"], "El Cajon");
    }

    #[test]
    fn html_output_shows_selection_and_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data = resource(dir.path());
        let out = dir.path().join("index.html");
        let out_arg = out.display();
        let line = format!("show {data} --state CA --format html -o {out_arg}");
        run_show(&show_args(&line), &ViewOptions::default()).expect("show html");

        let page = fs::read_to_string(&out).expect("read page");
        let selected = r#"<option value="CA" selected="selected">CA</option>"#;
        assert!(page.contains(selected));
        assert!(page.contains("hovered"));
        assert!(!page.contains("green lights"));
    }

    #[test]
    fn options_only_for_dropdown_fields() {
        let all = Field::FILTERABLE.to_vec();
        assert_eq!(dropdown_fields(None).unwrap(), all);
        assert_eq!(dropdown_fields(Some("Shape")).unwrap(), [Field::Shape]);

        let err = dropdown_fields(Some("comments")).unwrap_err();
        assert_eq!(err.to_string(), "comments has no dropdown");
        assert!(dropdown_fields(Some("altitude")).is_err());

        let dir = tempfile::tempdir().expect("create temp dir");
        let data = resource(dir.path());
        let line = format!("options {data} --field comments");
        let Command::Options(args) = parse(&line) else {
            panic!("expected the options command");
        };
        assert!(run_options(&args, &ViewOptions::default()).is_err());
    }
}
