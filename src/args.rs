//! These structs provide the CLI interface for the trips CLI.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// trips: A command-line tool for totaling trip expenses.
///
/// The purpose of this program is to take a table of trip expenses, one row per
/// destination with transport, lodging, food and other costs, validate it, sum
/// each row into a total, and optionally draw a bar chart of the totals. Rows
/// are read from a plain text file (or stdin) with whitespace-separated fields
/// and amounts may use either a comma or a period as the decimal separator.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create an empty expense table with the given number of rows.
    ///
    /// Fill in one line per trip with whitespace-separated fields: the
    /// destination first, then the transport, lodging, food and other
    /// amounts. Feed the file back with `trips total` or `trips chart`.
    New(NewArgs),
    /// Read a table, validate every row and print a total per destination.
    Total(TotalArgs),
    /// Read a table, validate it and draw a bar chart of the totals.
    Chart(ChartArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate
    /// for instructions.
    #[arg(long, env = "TRIPS_LOG_LEVEL", default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

impl Common {
    pub fn new(log_level: LevelFilter) -> Self {
        Self { log_level }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

/// Args for the `trips new` command.
#[derive(Debug, Parser, Clone)]
pub struct NewArgs {
    /// The number of empty rows the table should start with.
    #[arg(long, default_value_t = 5)]
    rows: usize,
}

impl NewArgs {
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Args for the `trips total` command.
#[derive(Debug, Parser, Clone)]
pub struct TotalArgs {
    /// The file to read. If not supplied, input will be taken from stdin.
    #[clap(long = "file", short = 'f')]
    file: Option<PathBuf>,
}

impl TotalArgs {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Args for the `trips chart` command.
#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    /// The file to read. If not supplied, input will be taken from stdin.
    #[clap(long = "file", short = 'f')]
    file: Option<PathBuf>,

    /// How many characters wide the longest bar should be.
    #[arg(long, default_value_t = 40)]
    width: usize,
}

impl ChartArgs {
    pub fn new(file: Option<PathBuf>, width: usize) -> Self {
        Self { file, width }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn width(&self) -> usize {
        self.width
    }
}
