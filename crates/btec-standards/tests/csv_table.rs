use std::fs;
use std::path::{Path, PathBuf};

use btec_model::QualificationType;
use btec_standards::{CsvReferenceTable, GradeBoundary, ReferenceTable, StandardsError};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "btec-grade-{}-{}-{}",
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

fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn certificate_table(name: &str, contents: &str) -> CsvReferenceTable {
    let dir = unique_temp_dir(name);
    write(&dir.join("Certificate.csv"), contents.as_bytes());
    CsvReferenceTable::new(dir)
}

const CERTIFICATE: &str = "BTECMinimumPoints,BTECMaximumPoints,BTECGrade,UCASPoints
200,219,PPP,40
220,239,MPP,48
240,259,MMP,n/a
";

#[test]
fn grade_for_score_matches_inclusive_range() {
    let table = certificate_table("inclusive", CERTIFICATE);
    let lookup = |score| {
        table
            .grade_for_score(QualificationType::Certificate, score)
            .unwrap()
    };

    assert_eq!(lookup(210).as_deref(), Some("PPP"));
    assert_eq!(lookup(200).as_deref(), Some("PPP"));
    assert_eq!(lookup(219).as_deref(), Some("PPP"));
    assert_eq!(lookup(220).as_deref(), Some("MPP"));
    assert_eq!(lookup(199), None);
    assert_eq!(lookup(260), None);
}

#[test]
fn points_for_grade_returns_stored_value() {
    let table = certificate_table("points", CERTIFICATE);

    assert_eq!(
        table
            .points_for_grade(QualificationType::Certificate, "PPP")
            .unwrap()
            .as_deref(),
        Some("40")
    );
    assert_eq!(
        table
            .points_for_grade(QualificationType::Certificate, "MMP")
            .unwrap()
            .as_deref(),
        Some("n/a")
    );
    assert_eq!(
        table
            .points_for_grade(QualificationType::Certificate, "ppp")
            .unwrap(),
        None
    );
}

#[test]
fn overlapping_rows_return_first_in_file_order() {
    let table = certificate_table(
        "overlap",
        "BTECMinimumPoints,BTECMaximumPoints,BTECGrade,UCASPoints
200,229,P,8
210,219,M,16
",
    );
    assert_eq!(
        table
            .grade_for_score(QualificationType::Certificate, 215)
            .unwrap()
            .as_deref(),
        Some("P")
    );
}

#[test]
fn columns_are_found_by_header_name() {
    let table = certificate_table(
        "reordered",
        "\u{feff}UCASPoints, BTECGrade ,BTECMaximumPoints,BTECMinimumPoints
 40 , PPP ,219,200
",
    );
    assert_eq!(
        table
            .grade_for_score(QualificationType::Certificate, 205)
            .unwrap()
            .as_deref(),
        Some("PPP")
    );
    assert_eq!(
        table
            .points_for_grade(QualificationType::Certificate, "PPP")
            .unwrap()
            .as_deref(),
        Some("40")
    );
}

#[test]
fn repeated_queries_are_idempotent() {
    let table = certificate_table("idempotent", CERTIFICATE);
    let first = table
        .grade_for_score(QualificationType::Certificate, 230)
        .unwrap();
    let second = table
        .grade_for_score(QualificationType::Certificate, 230)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_table_is_an_error() {
    let table = CsvReferenceTable::new(unique_temp_dir("missing"));
    let error = table
        .grade_for_score(QualificationType::Diploma, 900)
        .unwrap_err();
    assert!(matches!(
        error,
        StandardsError::MissingTable {
            qualification: QualificationType::Diploma,
            ..
        }
    ));
}

#[test]
fn missing_column_is_an_error() {
    let table = certificate_table(
        "no-points",
        "BTECMinimumPoints,BTECMaximumPoints,BTECGrade
200,219,PPP
",
    );
    let error = table
        .points_for_grade(QualificationType::Certificate, "PPP")
        .unwrap_err();
    assert!(matches!(
        error,
        StandardsError::MissingColumn {
            column: "UCASPoints",
            ..
        }
    ));
}

#[test]
fn malformed_bound_reports_line() {
    let table = certificate_table(
        "bad-bound",
        "BTECMinimumPoints,BTECMaximumPoints,BTECGrade,UCASPoints
200,219,PPP,40
two hundred,239,MPP,48
",
    );
    let error = table
        .grade_for_score(QualificationType::Certificate, 230)
        .unwrap_err();
    match error {
        StandardsError::InvalidBound {
            line,
            column,
            value,
            ..
        } => {
            assert_eq!(line, 3);
            assert_eq!(column, "BTECMinimumPoints");
            assert_eq!(value, "two hundred");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn grade_lookup_does_not_parse_bounds() {
    let table = certificate_table(
        "grade-only",
        "BTECMinimumPoints,BTECMaximumPoints,BTECGrade,UCASPoints
,,PPP,40
",
    );
    assert_eq!(
        table
            .points_for_grade(QualificationType::Certificate, "PPP")
            .unwrap()
            .as_deref(),
        Some("40")
    );
}

#[test]
fn load_rows_preserves_file_order() {
    let table = certificate_table("load", CERTIFICATE);
    let rows = table.load_rows(QualificationType::Certificate).unwrap();
    assert_eq!(
        rows,
        vec![
            GradeBoundary::new(200, 219, "PPP", "40"),
            GradeBoundary::new(220, 239, "MPP", "48"),
            GradeBoundary::new(240, 259, "MMP", "n/a"),
        ]
    );
}
