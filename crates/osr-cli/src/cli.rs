//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use osr_model::Provider;

#[derive(Parser)]
#[command(
    name = "osr",
    version,
    about = "Standardize sales-order insight files and assign outside sales reps",
    long_about = "Standardize distributor and principal insight files into one report layout,\n\
                  assign each order to an outside sales rep (OSR), and split or compile\n\
                  the resulting reports."
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

    /// Allow customer names and other row values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Lookup configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the lookup files (overrides OSR_LOOKUP_DIR and the config file).
    #[arg(long = "lookup-dir", value_name = "DIR", global = true)]
    pub lookup_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Standardize insight files and assign sales reps.
    Clean(CleanArgs),

    /// Split a standardized report into one file per sales rep.
    Split(SplitArgs),

    /// Combine sales rep feedback files into one report.
    Compile(CompileArgs),

    /// Load every lookup file and report row counts and key conflicts.
    Lookups,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Insight files (CSV).
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Company that produced the files.
    #[arg(long = "provider", short = 'p', value_name = "DGK|MOU|ABR|NA", value_parser = parse_provider)]
    pub provider: Provider,

    /// Output directory (default: next to each input file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Resolve rows on one thread.
    #[arg(long = "sequential")]
    pub sequential: bool,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Standardized report; its name must contain "Standardized".
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output directory (default: next to the input file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CompileArgs {
    /// Feedback files; the first one decides the column layout and report name.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory (default: next to the first file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

fn parse_provider(value: &str) -> Result<Provider, String> {
    value.parse::<Provider>().map_err(|error| error.to_string())
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
