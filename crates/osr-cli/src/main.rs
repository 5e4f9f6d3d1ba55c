//! `osr` command-line entry point.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use osr_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{LookupContext, run_clean, run_compile, run_lookups, run_split};
use crate::summary::{
    print_clean_summary, print_compile_summary, print_lookups, print_split_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Clean(args) => {
            let lookups = lookup_context(cli)?;
            let outcomes = run_clean(args, &lookups)?;
            print_clean_summary(&outcomes);
        }
        Command::Split(args) => {
            let outputs = run_split(args)?;
            print_split_summary(&outputs);
        }
        Command::Compile(args) => {
            let outcome = run_compile(args)?;
            print_compile_summary(&outcome);
        }
        Command::Lookups => {
            let lookups = lookup_context(cli)?;
            let report = run_lookups(&lookups)?;
            print_lookups(&report);
        }
    }
    Ok(())
}

fn lookup_context(cli: &Cli) -> anyhow::Result<LookupContext> {
    LookupContext::resolve(cli.config.as_deref(), cli.lookup_dir.as_deref())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
