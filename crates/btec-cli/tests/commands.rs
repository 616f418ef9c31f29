//! Tests for the calculate and tables commands over in-memory streams.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use btec_cli::banner::BANNER;
use btec_cli::commands::{CalculateOptions, exit_status, run_calculate, run_tables};
use btec_cli::prompt::{DISTINCTION_PROMPT, MERIT_PROMPT, PASS_PROMPT};
use btec_core::GradeResolver;
use btec_model::QualificationType;
use btec_standards::{CsvReferenceTable, GradeBoundary, InMemoryReferenceTable};

const CERTIFICATE_CSV: &str = "BTECMinimumPoints,BTECMaximumPoints,BTECGrade,UCASPoints
210,229,P,8
230,249,M,16
";

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "btec-cli-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn certificate_resolver() -> GradeResolver<InMemoryReferenceTable> {
    GradeResolver::new(
        InMemoryReferenceTable::new()
            .with_row(
                QualificationType::Certificate,
                GradeBoundary::new(210, 229, "P", "8"),
            )
            .with_row(
                QualificationType::Certificate,
                GradeBoundary::new(230, 249, "M", "16"),
            ),
    )
}

fn flags(pass: u32, merit: u32, distinction: u32) -> CalculateOptions {
    CalculateOptions {
        pass: Some(pass),
        merit: Some(merit),
        distinction: Some(distinction),
        ..CalculateOptions::default()
    }
}

struct Captured {
    result: anyhow::Result<u8>,
    stdout: String,
    stderr: String,
}

fn run<T: btec_standards::ReferenceTable>(
    options: &CalculateOptions,
    resolver: &GradeResolver<T>,
    input: &str,
) -> Captured {
    let mut input = Cursor::new(input.to_string());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = run_calculate(options, resolver, &mut input, &mut stdout, &mut stderr);
    Captured {
        result,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

const CERTIFICATE_REPORT: &str = "Number of units taken: 3
Qualification: Certificate
BTEC points: 210
BTEC grade: P
UCAS points: 8
";

#[test]
fn flags_only_run_prints_report_without_separator() {
    let output = run(&flags(3, 0, 0), &certificate_resolver(), "");

    assert_eq!(output.result.unwrap(), 0);
    assert_eq!(output.stdout, CERTIFICATE_REPORT);
    assert!(output.stderr.is_empty());
}

#[test]
fn prompted_run_separates_prompts_from_report() {
    let output = run(
        &CalculateOptions::default(),
        &certificate_resolver(),
        "3\n0\n0\n",
    );

    assert_eq!(output.result.unwrap(), 0);
    assert_eq!(
        output.stdout,
        format!("{PASS_PROMPT}{MERIT_PROMPT}{DISTINCTION_PROMPT}\n{CERTIFICATE_REPORT}")
    );
}

#[test]
fn banner_precedes_prompts() {
    let options = CalculateOptions {
        show_banner: true,
        ..flags(3, 0, 0)
    };
    let output = run(&options, &certificate_resolver(), "");

    assert_eq!(output.stdout, format!("{BANNER}\n{CERTIFICATE_REPORT}"));
}

#[test]
fn json_mode_keeps_stdout_machine_readable() {
    let options = CalculateOptions {
        json: true,
        show_banner: true,
        ..CalculateOptions::default()
    };
    let output = run(&options, &certificate_resolver(), "3\n0\n0\n");

    assert_eq!(output.result.unwrap(), 0);
    assert!(output.stderr.starts_with(BANNER));
    assert!(output.stderr.contains(PASS_PROMPT));
    assert!(!output.stdout.contains("Please enter"));

    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "done");
    assert_eq!(json["qualification"], "Certificate");
    assert_eq!(json["score"], 210);
    assert_eq!(json["grade"], "P");
    assert_eq!(json["points"], 8);
}

#[test]
fn unknown_qualification_prints_guidance_and_exits_one() {
    let output = run(&flags(2, 1, 1), &certificate_resolver(), "");

    assert_eq!(output.result.unwrap(), 1);
    assert!(output.stdout.starts_with("Number of units taken: 4\n\n"));
    assert!(output.stdout.contains("Known qualifications: Certificate (3 units)"));
    assert!(!output.stdout.contains("BTEC points"));
}

#[test]
fn unresolved_grade_exits_one() {
    let output = run(&flags(0, 0, 3), &certificate_resolver(), "");

    assert_eq!(output.result.unwrap(), 1);
    assert_eq!(
        output.stdout,
        "Number of units taken: 3
Qualification: Certificate
BTEC points: 270
Unable to lookup BTEC grade.
Please seek assistance.
"
    );
}

#[test]
fn resolved_stages_are_printed_before_a_missing_table_error() {
    let table = CsvReferenceTable::new(unique_temp_dir("empty"));
    let output = run(&flags(3, 0, 0), &GradeResolver::new(&table), "");

    assert_eq!(
        output.stdout,
        "Number of units taken: 3\nQualification: Certificate\nBTEC points: 210\n"
    );

    let mut stderr = Vec::new();
    assert_eq!(exit_status(output.result, &mut stderr), 1);
    let stderr = String::from_utf8(stderr).unwrap();
    assert!(
        stderr.starts_with("error: look up grade: no reference table for Certificate"),
        "{stderr}"
    );
}

#[test]
fn csv_tables_drive_a_full_calculation() {
    let dir = unique_temp_dir("full");
    fs::write(dir.join("Certificate.csv"), CERTIFICATE_CSV).unwrap();
    let table = CsvReferenceTable::new(dir);

    let output = run(&flags(3, 0, 0), &GradeResolver::new(&table), "");
    assert_eq!(output.result.unwrap(), 0);
    assert_eq!(output.stdout, CERTIFICATE_REPORT);
}

#[test]
fn tables_command_prints_requested_table() {
    let dir = unique_temp_dir("tables");
    fs::write(dir.join("Certificate.csv"), CERTIFICATE_CSV).unwrap();
    let table = CsvReferenceTable::new(dir);

    let mut stdout = Vec::new();
    run_tables(&table, Some(QualificationType::Certificate), &mut stdout).unwrap();
    let stdout = String::from_utf8(stdout).unwrap();

    assert!(stdout.starts_with("Certificate (3 units)\n"));
    assert!(stdout.contains("229"));
    assert!(stdout.contains("16"));
}

#[test]
fn tables_command_reports_missing_table() {
    let table = CsvReferenceTable::new(unique_temp_dir("tables-missing"));
    let mut stdout = Vec::new();

    let error = run_tables(&table, None, &mut stdout).unwrap_err();
    assert!(format!("{error:#}").starts_with("load Certificate table"));
    assert!(stdout.is_empty());
}

/// A reader that has gone away, as with `btec-grade tables | head`.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn closed_stdout_is_an_error_not_a_panic() {
    let dir = unique_temp_dir("tables-pipe");
    fs::write(dir.join("Certificate.csv"), CERTIFICATE_CSV).unwrap();
    let table = CsvReferenceTable::new(dir);

    let result = run_tables(&table, Some(QualificationType::Certificate), &mut ClosedPipe);
    let mut stderr = Vec::new();
    assert_eq!(exit_status(result.map(|()| 0), &mut stderr), 1);
    assert!(String::from_utf8(stderr).unwrap().contains("write output"));
}
