//! Type scale calculator CLI.

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use typescale_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use typescale_cli::commands::{run_css, run_export, run_fluid, run_scale};
use typescale_cli::logging::{LogConfig, LogFormat, init_logging};
use typescale_cli::settings::resolve_settings;

mod summary;

use crate::summary::{print_css, print_export, print_fluid, print_ratios, print_scale};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command, cli.settings.as_deref()) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command, settings_path: Option<&Path>) -> Result<()> {
    let settings = resolve_settings(settings_path)?;
    match command {
        Command::Scale(args) => print_scale(&run_scale(args, settings)?),
        Command::Fluid(args) => print_fluid(&run_fluid(args, settings)?),
        Command::Css(args) => {
            let (method, expressions) = run_css(args)?;
            print_css(method, &expressions);
        }
        Command::Export(args) => print_export(&run_export(args, settings)?),
        Command::Ratios => print_ratios(settings.scale_ratio),
    }
    Ok(())
}

/// Build logging configuration from CLI flags.
///
/// `--log-level` wins over `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
