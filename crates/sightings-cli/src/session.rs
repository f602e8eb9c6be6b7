//! Line-driven form session.
//!
//! Each input line is one interaction with the filter form: changing a
//! control, or firing the apply/clear events. Lines are handled strictly in
//! order.

use std::fmt;
use std::io::{self, BufRead, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use sightings_model::{Field, FilterControls, OptionSet, UnknownField};
use sightings_report::TableView;
use thiserror::Error;
use tracing::debug;

use crate::controller::{FilterController, FormEvent};

const HELP: &str = "\
commands:
  select <field> <value>   choose a dropdown value (city, state, country, shape)
  unselect <field>         back to the placeholder
  start <date> | start     set or blank the start date (YYYY-MM-DD)
  end <date> | end         set or blank the end date
  apply                    filter with the current controls
  clear                    reset the controls and show every record
  options                  list dropdown options
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Select(Field, String),
    Unselect(Field),
    Start(Option<String>),
    End(Option<String>),
    Apply,
    Clear,
    Options,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error(transparent)]
    Field(#[from] UnknownField),
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let command = match verb.to_ascii_lowercase().as_str() {
        "select" => {
            let Some((field, value)) = rest.split_once(char::is_whitespace) else {
                return Err(CommandError::MissingArgument {
                    command: "select",
                    what: "a field and a value",
                });
            };
            SessionCommand::Select(field.parse()?, value.trim().to_string())
        }
        "unselect" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "unselect",
                    what: "a field",
                });
            }
            SessionCommand::Unselect(rest.parse()?)
        }
        "start" => SessionCommand::Start(non_empty(rest)),
        "end" => SessionCommand::End(non_empty(rest)),
        "apply" => SessionCommand::Apply,
        "clear" | "reset" => SessionCommand::Clear,
        "options" => SessionCommand::Options,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Run commands from `input` until it ends or `quit` is read.
///
/// The view is written to `output` after every apply/clear. Rejected
/// commands and events are reported and the session carries on.
pub fn run_session<V, R, W>(
    controller: &mut FilterController<'_, V>,
    controls: &mut FilterControls,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    V: TableView + fmt::Display,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(output, "error: {error}")?;
                continue;
            }
        };
        debug!(?command, "session command");
        match command {
            SessionCommand::Select(field, value) => {
                if let Err(error) = controls.select(field, &value) {
                    writeln!(output, "error: {error}")?;
                }
            }
            SessionCommand::Unselect(field) => controls.unselect(field),
            SessionCommand::Start(value) => controls.set_start(value),
            SessionCommand::End(value) => controls.set_end(value),
            SessionCommand::Apply => fire(controller, controls, FormEvent::Apply, output)?,
            SessionCommand::Clear => fire(controller, controls, FormEvent::Clear, output)?,
            SessionCommand::Options => writeln!(output, "{}", options_table(controls.options()))?,
            SessionCommand::Help => writeln!(output, "{HELP}")?,
            SessionCommand::Quit => break,
        }
    }
    Ok(())
}

fn fire<V, W>(
    controller: &mut FilterController<'_, V>,
    controls: &mut FilterControls,
    event: FormEvent,
    output: &mut W,
) -> io::Result<()>
where
    V: TableView + fmt::Display,
    W: Write,
{
    match controller.handle(event, controls) {
        Ok(outcome) => {
            writeln!(output, "{}", controller.view())?;
            let rows = outcome.rows;
            match outcome.excluded {
                0 => writeln!(output, "{rows} rows"),
                n => writeln!(output, "{rows} rows ({n} excluded: unparseable date)"),
            }
        }
        Err(error) => writeln!(output, "error: {error}"),
    }
}

/// Dropdown options as a two-column table.
pub fn options_table(options: &OptionSet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Options").add_attribute(Attribute::Bold),
    ]);
    for field in options.fields() {
        let values = options.get(field);
        let text = if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        };
        table.add_row(vec![Cell::new(field.label()), Cell::new(text)]);
    }
    table
}
