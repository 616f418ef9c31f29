//! CLI argument definitions for the grade calculator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use btec_cli::commands::CalculateOptions;
use btec_model::QualificationType;

#[derive(Parser)]
#[command(
    name = "btec-grade",
    version,
    about = "BTEC Nationals grade and UCAS points calculator",
    long_about = "Convert unit results for a Level 3 2010 BTEC National qualification into \
                  BTEC points, a BTEC grade and UCAS tariff points.\n\n\
                  Runs the calculator when no subcommand is given; any unit count not \
                  passed as a flag is prompted for."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

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

    /// Directory holding the grade boundary tables
    /// (default: $BTEC_TABLES_DIR, then the bundled 2010 tables).
    #[arg(long = "tables-dir", value_name = "DIR", global = true)]
    pub tables_dir: Option<PathBuf>,

    /// Skip the licence and disclaimer banner.
    #[arg(long = "no-banner", global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate BTEC points, grade and UCAS points from unit results.
    Calculate(CalculateArgs),

    /// Print the grade boundary and UCAS points tables.
    Tables(TablesArgs),
}

#[derive(Args, Default)]
pub struct CalculateArgs {
    /// Number of units achieved at pass level.
    #[arg(long = "pass", value_name = "UNITS")]
    pub pass: Option<u32>,

    /// Number of units achieved at merit level.
    #[arg(long = "merit", value_name = "UNITS")]
    pub merit: Option<u32>,

    /// Number of units achieved at distinction level.
    #[arg(long = "distinction", value_name = "UNITS")]
    pub distinction: Option<u32>,

    /// Print the result as JSON on stdout (prompts and banner go to stderr).
    #[arg(long = "json")]
    pub json: bool,
}

impl CalculateArgs {
    pub fn options(&self, show_banner: bool) -> CalculateOptions {
        CalculateOptions {
            pass: self.pass,
            merit: self.merit,
            distinction: self.distinction,
            json: self.json,
            show_banner,
        }
    }
}

#[derive(Args)]
pub struct TablesArgs {
    /// Only print the table for this qualification (e.g. "Diploma", "90CreditDiploma").
    #[arg(value_name = "QUALIFICATION")]
    pub qualification: Option<QualificationType>,
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
