use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use btec_core::{Failure, Outcome, Stage};
use btec_model::{AdmissionsPoints, QUALIFICATIONS_BY_UNITS, QualificationType};
use btec_standards::GradeBoundary;

const UNKNOWN_QUALIFICATION_GUIDANCE: &str = "\
The number of units that you have provided does not correspond
to any of the calculator's known qualifications. Please contact your local
careers advisor or other person in authority for information on your
qualification.";

const SEEK_ASSISTANCE: &str = "Please seek assistance.";

/// Report lines for a stage that has just resolved.
pub fn stage_lines(stage: Stage<'_>) -> Vec<String> {
    match stage {
        Stage::Classified {
            unit_total,
            qualification,
            score,
        } => {
            let mut lines = vec![format!("Number of units taken: {unit_total}")];
            if let Some(qualification) = qualification.known() {
                lines.push(format!("Qualification: {}", qualification.display_name()));
                lines.push(format!("BTEC points: {score}"));
            }
            lines
        }
        Stage::Graded(grade) => vec![format!("BTEC grade: {grade}")],
        Stage::Pointed(points) => vec![format!("UCAS points: {points}")],
    }
}

/// Guidance shown after the last resolved stage when a calculation stops early.
pub fn failure_lines(failure: Failure) -> Vec<String> {
    match failure {
        Failure::UnknownQualification => vec![
            String::new(),
            UNKNOWN_QUALIFICATION_GUIDANCE.to_string(),
            format!("Known qualifications: {}.", known_unit_totals()),
        ],
        Failure::UnresolvedGrade => vec![
            "Unable to lookup BTEC grade.".to_string(),
            SEEK_ASSISTANCE.to_string(),
        ],
        Failure::UnresolvedPoints => vec![
            "Unable to lookup UCAS points.".to_string(),
            SEEK_ASSISTANCE.to_string(),
        ],
    }
}

/// Render the stages that resolved, followed by guidance for the one that
/// did not.
pub fn render_outcome(outcome: &Outcome) -> String {
    let mut lines: Vec<String> = outcome.stages().into_iter().flat_map(stage_lines).collect();
    if let Some(failure) = outcome.failure() {
        lines.extend(failure_lines(failure));
    }
    lines.join("\n")
}

fn known_unit_totals() -> String {
    QUALIFICATIONS_BY_UNITS
        .iter()
        .map(|(units, qualification)| format!("{} ({units} units)", qualification.display_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a table of grade boundaries and UCAS points for one qualification.
pub fn reference_table(qualification: QualificationType, rows: &[GradeBoundary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grade"),
        header_cell("Minimum"),
        header_cell("Maximum"),
        header_cell("UCAS points"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.grade)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(row.minimum),
            Cell::new(row.maximum),
            points_cell(&row.ucas_points),
        ]);
    }
    if rows.is_empty() {
        table.add_row(vec![
            dim_cell(format!("no rows for {qualification}")),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn points_cell(value: &str) -> Cell {
    if value.trim().parse::<AdmissionsPoints>().is_ok() {
        Cell::new(value)
    } else {
        Cell::new(value).fg(Color::Red)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
