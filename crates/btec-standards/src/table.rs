//! Reference table access.
//!
//! One logical table per qualification, with columns
//! `BTECMinimumPoints`, `BTECMaximumPoints`, `BTECGrade` and `UCASPoints`.

use serde::{Deserialize, Serialize};

use btec_model::{NumericScore, QualificationType};

use crate::error::StandardsError;

pub const MINIMUM_COLUMN: &str = "BTECMinimumPoints";
pub const MAXIMUM_COLUMN: &str = "BTECMaximumPoints";
pub const GRADE_COLUMN: &str = "BTECGrade";
pub const UCAS_POINTS_COLUMN: &str = "UCASPoints";

/// A single row of a reference table.
///
/// `ucas_points` is kept as stored; callers decide how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBoundary {
    pub minimum: NumericScore,
    pub maximum: NumericScore,
    pub grade: String,
    pub ucas_points: String,
}

impl GradeBoundary {
    pub fn new(
        minimum: NumericScore,
        maximum: NumericScore,
        grade: impl Into<String>,
        ucas_points: impl Into<String>,
    ) -> Self {
        Self {
            minimum,
            maximum,
            grade: grade.into(),
            ucas_points: ucas_points.into(),
        }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, score: NumericScore) -> bool {
        self.minimum <= score && score <= self.maximum
    }
}

/// Read-only queries against the grade boundary tables.
///
/// Each call is a single bounded lookup. Implementations return the first
/// matching row in table order and do not check for overlapping ranges or
/// duplicate grades. `Ok(None)` means no row matched.
pub trait ReferenceTable {
    /// Grade of the first row whose `[minimum, maximum]` contains `score`.
    fn grade_for_score(
        &self,
        qualification: QualificationType,
        score: NumericScore,
    ) -> Result<Option<String>, StandardsError>;

    /// Stored UCAS points of the first row whose grade equals `grade`.
    fn points_for_grade(
        &self,
        qualification: QualificationType,
        grade: &str,
    ) -> Result<Option<String>, StandardsError>;
}

impl<T: ReferenceTable + ?Sized> ReferenceTable for &T {
    fn grade_for_score(
        &self,
        qualification: QualificationType,
        score: NumericScore,
    ) -> Result<Option<String>, StandardsError> {
        (**self).grade_for_score(qualification, score)
    }

    fn points_for_grade(
        &self,
        qualification: QualificationType,
        grade: &str,
    ) -> Result<Option<String>, StandardsError> {
        (**self).points_for_grade(qualification, grade)
    }
}
