//! Grade and UCAS points resolution against a reference table.

use tracing::{debug, warn};

use btec_model::{AdmissionsPoints, LetterGrade, NumericScore, QualificationType};
use btec_standards::{ReferenceTable, StandardsError};

/// Translates scores into grades and grades into UCAS points.
///
/// Only accepts a known [`QualificationType`], so an unknown award can never
/// reach the table. `Ok(None)` is an unresolved lookup; `Err` is a failure of
/// the table itself.
#[derive(Debug, Clone)]
pub struct GradeResolver<T> {
    table: T,
}

impl<T: ReferenceTable> GradeResolver<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Grade whose score range contains `score`.
    pub fn grade_for_score(
        &self,
        qualification: QualificationType,
        score: NumericScore,
    ) -> Result<Option<LetterGrade>, StandardsError> {
        let Some(stored) = self.table.grade_for_score(qualification, score)? else {
            debug!(qualification = qualification.as_str(), score, "no grade row");
            return Ok(None);
        };
        match LetterGrade::new(stored) {
            Ok(grade) => Ok(Some(grade)),
            Err(error) => {
                warn!(
                    qualification = qualification.as_str(),
                    score,
                    %error,
                    "grade row has a blank grade"
                );
                Ok(None)
            }
        }
    }

    /// UCAS points stored for `grade`.
    ///
    /// A stored value that does not parse as an integer is unresolved.
    pub fn points_for_grade(
        &self,
        qualification: QualificationType,
        grade: &LetterGrade,
    ) -> Result<Option<AdmissionsPoints>, StandardsError> {
        let Some(stored) = self.table.points_for_grade(qualification, grade.as_str())? else {
            debug!(
                qualification = qualification.as_str(),
                grade = grade.as_str(),
                "no points row"
            );
            return Ok(None);
        };
        match stored.trim().parse::<AdmissionsPoints>() {
            Ok(points) => Ok(Some(points)),
            Err(_) => {
                warn!(
                    qualification = qualification.as_str(),
                    grade = grade.as_str(),
                    stored = stored.as_str(),
                    "UCAS points value is not an integer"
                );
                Ok(None)
            }
        }
    }
}
