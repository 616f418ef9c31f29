//! Command bodies for `btec-grade`.
//!
//! Input and output streams are passed in so the commands can be driven
//! from tests. Errors carry `anyhow` context; [`exit_status`] turns a command
//! result into the process status.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use btec_core::{GradeResolver, calculate, calculate_with};
use btec_model::{QualificationType, UnitCounts};
use btec_standards::{CsvReferenceTable, ReferenceTable};

use crate::banner::BANNER;
use crate::prompt::read_unit_counts;
use crate::summary::{failure_lines, reference_table, stage_lines};

/// Settings for one run of the calculator.
#[derive(Debug, Clone, Default)]
pub struct CalculateOptions {
    pub pass: Option<u32>,
    pub merit: Option<u32>,
    pub distinction: Option<u32>,
    /// Emit the outcome as JSON on stdout; banner and prompts go to stderr.
    pub json: bool,
    pub show_banner: bool,
}

impl CalculateOptions {
    fn prompts_needed(&self) -> bool {
        self.pass.is_none() || self.merit.is_none() || self.distinction.is_none()
    }
}

/// Run the calculator and return the process exit status.
///
/// In text mode each report line is written as soon as its stage resolves,
/// so a table failure still leaves the earlier stages on stdout.
pub fn run_calculate<T, R>(
    options: &CalculateOptions,
    resolver: &GradeResolver<T>,
    input: &mut R,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<u8>
where
    T: ReferenceTable,
    R: BufRead,
{
    if options.json {
        let units = read_units(options, input, stderr)?;
        let outcome = calculate(resolver, units).context("look up grade")?;
        let json = serde_json::to_string_pretty(&outcome).context("serialize result")?;
        writeln!(stdout, "{json}").context("write output")?;
        stdout.flush().context("write output")?;
        return Ok(outcome.exit_code());
    }

    let units = read_units(options, input, stdout)?;
    if options.prompts_needed() {
        writeln!(stdout).context("write output")?;
    }

    let mut write_error = None;
    let result = calculate_with(resolver, units, |stage| {
        if write_error.is_none() {
            write_error = write_lines(stdout, &stage_lines(stage)).err();
        }
    });
    if let Some(error) = write_error {
        return Err(error).context("write output");
    }
    let outcome = result.context("look up grade")?;

    if let Some(failure) = outcome.failure() {
        debug!(%failure, "calculation stopped early");
        write_lines(stdout, &failure_lines(failure)).context("write output")?;
    }
    stdout.flush().context("write output")?;
    Ok(outcome.exit_code())
}

fn read_units<R: BufRead>(
    options: &CalculateOptions,
    input: &mut R,
    console: &mut dyn Write,
) -> Result<UnitCounts> {
    if options.show_banner {
        writeln!(console, "{BANNER}").context("write banner")?;
    }
    read_unit_counts(
        input,
        console,
        options.pass,
        options.merit,
        options.distinction,
    )
    .context("read unit counts")
}

fn write_lines(output: &mut dyn Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    output.flush()
}

/// Print the reference tables for one qualification, or all of them.
pub fn run_tables(
    table: &CsvReferenceTable,
    qualification: Option<QualificationType>,
    stdout: &mut dyn Write,
) -> Result<()> {
    let span = info_span!("tables");
    let _guard = span.enter();

    let qualifications: Vec<QualificationType> = match qualification {
        Some(qualification) => vec![qualification],
        None => QualificationType::ALL.to_vec(),
    };
    for (index, qualification) in qualifications.into_iter().enumerate() {
        let rows = table
            .load_rows(qualification)
            .with_context(|| format!("load {} table", qualification.as_str()))?;
        if index > 0 {
            writeln!(stdout).context("write output")?;
        }
        writeln!(
            stdout,
            "{} ({} units)",
            qualification.display_name(),
            qualification.unit_total()
        )
        .context("write output")?;
        writeln!(stdout, "{}", reference_table(qualification, &rows)).context("write output")?;
    }
    stdout.flush().context("write output")
}

/// Process exit status for a command result. Errors are reported on `stderr`
/// and map to 1.
pub fn exit_status(result: Result<u8>, stderr: &mut dyn Write) -> u8 {
    match result {
        Ok(code) => code,
        Err(error) => {
            // Nothing more to do if stderr itself is gone.
            let _ = writeln!(stderr, "error: {error:#}");
            1
        }
    }
}
