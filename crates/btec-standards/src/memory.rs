//! In-memory reference table.

use std::collections::BTreeMap;

use btec_model::{NumericScore, QualificationType};

use crate::error::StandardsError;
use crate::table::{GradeBoundary, ReferenceTable};

/// Reference table held in memory, rows kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceTable {
    tables: BTreeMap<QualificationType, Vec<GradeBoundary>>,
}

impl InMemoryReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_row(mut self, qualification: QualificationType, row: GradeBoundary) -> Self {
        self.insert(qualification, row);
        self
    }

    pub fn insert(&mut self, qualification: QualificationType, row: GradeBoundary) {
        self.tables.entry(qualification).or_default().push(row);
    }

    pub fn rows(&self, qualification: QualificationType) -> &[GradeBoundary] {
        self.tables
            .get(&qualification)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl ReferenceTable for InMemoryReferenceTable {
    fn grade_for_score(
        &self,
        qualification: QualificationType,
        score: NumericScore,
    ) -> Result<Option<String>, StandardsError> {
        Ok(self
            .rows(qualification)
            .iter()
            .find(|row| row.contains(score))
            .map(|row| row.grade.clone()))
    }

    fn points_for_grade(
        &self,
        qualification: QualificationType,
        grade: &str,
    ) -> Result<Option<String>, StandardsError> {
        Ok(self
            .rows(qualification)
            .iter()
            .find(|row| row.grade == grade)
            .map(|row| row.ucas_points.clone()))
    }
}
