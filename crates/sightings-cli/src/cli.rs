//! CLI argument definitions for the sightings table.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sightings",
    version,
    about = "Browse UFO sightings with dropdown and date-range filters",
    long_about = "Load a JSON array of sighting records, normalize them and show a \
                  filterable table.\n\n\
                  Filters are exact matches on city, state, country and shape, \
                  plus an inclusive date range."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include timestamps in log lines.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow free-text record values (comments) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// JSON file with view options (default dates, column width, styling).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the table, optionally filtered.
    Show(ShowArgs),

    /// List the dropdown options derived from the data.
    Options(OptionsArgs),

    /// Drive the filter form from stdin, one command per line.
    Session(SessionArgs),
}

#[derive(Args)]
pub struct DataArgs {
    /// Sightings JSON resource (default: the configured data path).
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Only sightings in this city.
    #[arg(long)]
    pub city: Option<String>,

    /// Only sightings in this state.
    #[arg(long)]
    pub state: Option<String>,

    /// Only sightings in this country.
    #[arg(long)]
    pub country: Option<String>,

    /// Only sightings of this shape.
    #[arg(long)]
    pub shape: Option<String>,

    /// First day of the date range (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// Last day of the date range, inclusive (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ShowArgs {
    /// True when any control was given, i.e. the apply event should fire.
    pub fn has_filters(&self) -> bool {
        self.city.is_some()
            || self.state.is_some()
            || self.country.is_some()
            || self.shape.is_some()
            || self.start.is_some()
            || self.end.is_some()
    }
}

#[derive(Parser)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Only list options for this field.
    #[arg(long, value_name = "FIELD")]
    pub field: Option<String>,
}

#[derive(Parser)]
pub struct SessionArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Html,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
