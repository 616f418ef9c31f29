//! BTEC Nationals grade and UCAS points calculator.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use btec_cli::commands::{exit_status, run_calculate, run_tables};
use btec_cli::logging::{LogConfig, LogFormat, init_logging};
use btec_core::GradeResolver;
use btec_standards::{CsvReferenceTable, resolve_tables_dir};
use clap::{ColorChoice, Parser};
use tracing::debug;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{CalculateArgs, Cli, Command, LogFormatArg, LogLevelArg};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    let tables_dir = resolve_tables_dir(cli.tables_dir.as_deref());
    debug!(tables_dir = %tables_dir.display(), "using reference tables");
    let table = CsvReferenceTable::new(tables_dir);

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let result = match &cli.command {
        Some(Command::Tables(args)) => {
            run_tables(&table, args.qualification, &mut stdout).map(|()| 0)
        }
        Some(Command::Calculate(args)) => {
            calculate(&cli, args, &table, &mut stdout, &mut stderr)
        }
        None => calculate(
            &cli,
            &CalculateArgs::default(),
            &table,
            &mut stdout,
            &mut stderr,
        ),
    };
    ExitCode::from(exit_status(result, &mut stderr))
}

fn calculate(
    cli: &Cli,
    args: &CalculateArgs,
    table: &CsvReferenceTable,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> anyhow::Result<u8> {
    run_calculate(
        &args.options(!cli.no_banner),
        &GradeResolver::new(table),
        &mut io::stdin().lock(),
        stdout,
        stderr,
    )
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
