//! CSV-backed reference tables.
//!
//! Each qualification's table lives in its own file under the tables
//! directory (see [`crate::paths::table_path`]). Every query opens the file,
//! scans rows in order until the first match, and closes it again when the
//! reader goes out of scope, whether the scan matched, found nothing, or failed.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use tracing::{debug, trace};

use btec_model::{NumericScore, QualificationType};

use crate::error::StandardsError;
use crate::paths::table_path;
use crate::table::{
    GRADE_COLUMN, GradeBoundary, MAXIMUM_COLUMN, MINIMUM_COLUMN, ReferenceTable,
    UCAS_POINTS_COLUMN,
};

/// Reference tables stored as one CSV file per qualification.
#[derive(Debug, Clone)]
pub struct CsvReferenceTable {
    root: PathBuf,
}

impl CsvReferenceTable {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read every row of a qualification's table, in file order.
    pub fn load_rows(
        &self,
        qualification: QualificationType,
    ) -> Result<Vec<GradeBoundary>, StandardsError> {
        let mut table = TableFile::open(&self.root, qualification)?;
        let mut rows = Vec::new();
        while let Some(record) = table.next_record()? {
            rows.push(GradeBoundary {
                minimum: table.bound(&record, Bound::Minimum)?,
                maximum: table.bound(&record, Bound::Maximum)?,
                grade: table.grade(&record).to_string(),
                ucas_points: table.ucas_points(&record).to_string(),
            });
        }
        Ok(rows)
    }
}

impl ReferenceTable for CsvReferenceTable {
    fn grade_for_score(
        &self,
        qualification: QualificationType,
        score: NumericScore,
    ) -> Result<Option<String>, StandardsError> {
        let mut table = TableFile::open(&self.root, qualification)?;
        debug!(
            qualification = qualification.as_str(),
            score,
            path = %table.path.display(),
            "looking up grade"
        );
        while let Some(record) = table.next_record()? {
            let minimum = table.bound(&record, Bound::Minimum)?;
            let maximum = table.bound(&record, Bound::Maximum)?;
            if minimum <= score && score <= maximum {
                let grade = table.grade(&record);
                trace!(minimum, maximum, grade, "matched grade row");
                return Ok(Some(grade.to_string()));
            }
        }
        Ok(None)
    }

    fn points_for_grade(
        &self,
        qualification: QualificationType,
        grade: &str,
    ) -> Result<Option<String>, StandardsError> {
        let mut table = TableFile::open(&self.root, qualification)?;
        debug!(
            qualification = qualification.as_str(),
            grade,
            path = %table.path.display(),
            "looking up UCAS points"
        );
        while let Some(record) = table.next_record()? {
            if table.grade(&record) == grade {
                let points = table.ucas_points(&record);
                trace!(grade, points, "matched points row");
                return Ok(Some(points.to_string()));
            }
        }
        Ok(None)
    }
}

#[derive(Clone, Copy)]
enum Bound {
    Minimum,
    Maximum,
}

/// An open table file. Dropping it closes the file.
struct TableFile {
    path: PathBuf,
    reader: Reader<File>,
    columns: Columns,
    record: StringRecord,
}

struct Columns {
    minimum: usize,
    maximum: usize,
    grade: usize,
    ucas_points: usize,
}

impl TableFile {
    fn open(root: &Path, qualification: QualificationType) -> Result<Self, StandardsError> {
        let path = table_path(root, qualification);
        let file = File::open(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StandardsError::MissingTable {
                    qualification,
                    path: path.clone(),
                }
            } else {
                StandardsError::io(&path, source)
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);
        let headers = reader
            .headers()
            .map_err(|error| StandardsError::csv(&path, &error))?
            .clone();
        let columns = Columns::from_headers(&headers, &path)?;

        Ok(Self {
            path,
            reader,
            columns,
            record: StringRecord::new(),
        })
    }

    fn next_record(&mut self) -> Result<Option<StringRecord>, StandardsError> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(|error| StandardsError::csv(&self.path, &error))?;
        Ok(more.then(|| self.record.clone()))
    }

    fn bound(&self, record: &StringRecord, bound: Bound) -> Result<NumericScore, StandardsError> {
        let (index, column) = match bound {
            Bound::Minimum => (self.columns.minimum, MINIMUM_COLUMN),
            Bound::Maximum => (self.columns.maximum, MAXIMUM_COLUMN),
        };
        let value = record.get(index).unwrap_or("");
        value
            .parse::<NumericScore>()
            .map_err(|_| StandardsError::InvalidBound {
                path: self.path.clone(),
                line: record.position().map_or(0, csv::Position::line),
                column,
                value: value.to_string(),
            })
    }

    fn grade<'r>(&self, record: &'r StringRecord) -> &'r str {
        record.get(self.columns.grade).unwrap_or("")
    }

    fn ucas_points<'r>(&self, record: &'r StringRecord) -> &'r str {
        record.get(self.columns.ucas_points).unwrap_or("")
    }
}

impl Columns {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self, StandardsError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header.trim_matches('\u{feff}') == column)
                .ok_or_else(|| StandardsError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };
        Ok(Self {
            minimum: find(MINIMUM_COLUMN)?,
            maximum: find(MAXIMUM_COLUMN)?,
            grade: find(GRADE_COLUMN)?,
            ucas_points: find(UCAS_POINTS_COLUMN)?,
        })
    }
}
