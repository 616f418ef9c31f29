//! The units → qualification → score → grade → points pipeline.
//!
//! Stages run strictly in order and stop at the first one that cannot be
//! resolved:
//!
//! ```text
//! units ─▶ qualification ─▶ score ─▶ grade ─▶ points ─▶ Done
//!               │                      │         │
//!               ▼                      ▼         ▼
//!      QualificationUnknown   GradeUnresolved  PointsUnresolved
//! ```
//!
//! Each terminal state is an [`Outcome`] variant. Table failures (missing
//! file, malformed row) are returned as `Err` instead. [`calculate_with`]
//! reports every resolved [`Stage`] before the next lookup runs, so callers
//! can show partial results even when a later lookup fails.

use std::fmt;

use serde::Serialize;
use tracing::{info, info_span};

use btec_model::{
    AdmissionsPoints, LetterGrade, NumericScore, Qualification, QualificationType, UnitCounts,
};
use btec_standards::{ReferenceTable, StandardsError};

use crate::resolver::GradeResolver;

/// A fully resolved calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub units: UnitCounts,
    pub unit_total: u64,
    pub qualification: QualificationType,
    pub score: NumericScore,
    pub grade: LetterGrade,
    pub points: AdmissionsPoints,
}

/// Terminal state of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Done(GradeReport),
    QualificationUnknown {
        units: UnitCounts,
        unit_total: u64,
        score: NumericScore,
    },
    GradeUnresolved {
        units: UnitCounts,
        qualification: QualificationType,
        score: NumericScore,
    },
    PointsUnresolved {
        units: UnitCounts,
        qualification: QualificationType,
        score: NumericScore,
        grade: LetterGrade,
    },
}

/// A pipeline stage that has just resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    /// Units were classified and scored. Always reported first.
    Classified {
        unit_total: u64,
        qualification: Qualification,
        score: NumericScore,
    },
    Graded(&'a LetterGrade),
    Pointed(AdmissionsPoints),
}

/// Why a calculation stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Failure {
    UnknownQualification,
    UnresolvedGrade,
    UnresolvedPoints,
}

impl Failure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Failure::UnknownQualification => "unknown qualification",
            Failure::UnresolvedGrade => "unresolved BTEC grade",
            Failure::UnresolvedPoints => "unresolved UCAS points",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Outcome {
    pub fn units(&self) -> UnitCounts {
        match self {
            Outcome::Done(report) => report.units,
            Outcome::QualificationUnknown { units, .. }
            | Outcome::GradeUnresolved { units, .. }
            | Outcome::PointsUnresolved { units, .. } => *units,
        }
    }

    pub fn qualification(&self) -> Qualification {
        match self {
            Outcome::Done(report) => Qualification::Known(report.qualification),
            Outcome::QualificationUnknown { unit_total, .. } => Qualification::Unknown {
                unit_total: *unit_total,
            },
            Outcome::GradeUnresolved { qualification, .. }
            | Outcome::PointsUnresolved { qualification, .. } => {
                Qualification::Known(*qualification)
            }
        }
    }

    pub fn score(&self) -> NumericScore {
        match self {
            Outcome::Done(report) => report.score,
            Outcome::QualificationUnknown { score, .. }
            | Outcome::GradeUnresolved { score, .. }
            | Outcome::PointsUnresolved { score, .. } => *score,
        }
    }

    pub fn grade(&self) -> Option<&LetterGrade> {
        match self {
            Outcome::Done(report) => Some(&report.grade),
            Outcome::PointsUnresolved { grade, .. } => Some(grade),
            Outcome::QualificationUnknown { .. } | Outcome::GradeUnresolved { .. } => None,
        }
    }

    pub fn points(&self) -> Option<AdmissionsPoints> {
        match self {
            Outcome::Done(report) => Some(report.points),
            _ => None,
        }
    }

    /// Stages that resolved on the way to this outcome, in order.
    pub fn stages(&self) -> Vec<Stage<'_>> {
        let mut stages = vec![Stage::Classified {
            unit_total: self.units().total(),
            qualification: self.qualification(),
            score: self.score(),
        }];
        if let Some(grade) = self.grade() {
            stages.push(Stage::Graded(grade));
        }
        if let Some(points) = self.points() {
            stages.push(Stage::Pointed(points));
        }
        stages
    }

    pub fn failure(&self) -> Option<Failure> {
        match self {
            Outcome::Done(_) => None,
            Outcome::QualificationUnknown { .. } => Some(Failure::UnknownQualification),
            Outcome::GradeUnresolved { .. } => Some(Failure::UnresolvedGrade),
            Outcome::PointsUnresolved { .. } => Some(Failure::UnresolvedPoints),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    /// Process exit status: 0 when every stage resolved, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Run the full pipeline for one set of unit results.
pub fn calculate<T: ReferenceTable>(
    resolver: &GradeResolver<T>,
    units: UnitCounts,
) -> Result<Outcome, StandardsError> {
    calculate_with(resolver, units, |_| {})
}

/// Run the pipeline, calling `on_stage` as each stage resolves.
pub fn calculate_with<T, F>(
    resolver: &GradeResolver<T>,
    units: UnitCounts,
    mut on_stage: F,
) -> Result<Outcome, StandardsError>
where
    T: ReferenceTable,
    F: FnMut(Stage<'_>),
{
    let span = info_span!(
        "calculate",
        pass = units.pass,
        merit = units.merit,
        distinction = units.distinction
    );
    let _guard = span.enter();

    let unit_total = units.total();
    let score = units.score();
    let classified = units.qualification();
    on_stage(Stage::Classified {
        unit_total,
        qualification: classified,
        score,
    });
    let qualification = match classified {
        Qualification::Known(qualification) => qualification,
        Qualification::Unknown { unit_total } => {
            info!(unit_total, "no qualification for unit total");
            return Ok(Outcome::QualificationUnknown {
                units,
                unit_total,
                score,
            });
        }
    };
    info!(
        qualification = qualification.as_str(),
        unit_total, score, "qualification resolved"
    );

    let Some(grade) = resolver.grade_for_score(qualification, score)? else {
        info!(score, "grade unresolved");
        return Ok(Outcome::GradeUnresolved {
            units,
            qualification,
            score,
        });
    };
    on_stage(Stage::Graded(&grade));

    let Some(points) = resolver.points_for_grade(qualification, &grade)? else {
        info!(grade = grade.as_str(), "UCAS points unresolved");
        return Ok(Outcome::PointsUnresolved {
            units,
            qualification,
            score,
            grade,
        });
    };
    on_stage(Stage::Pointed(points));

    info!(grade = grade.as_str(), points, "calculation complete");
    Ok(Outcome::Done(GradeReport {
        units,
        unit_total,
        qualification,
        score,
        grade,
        points,
    }))
}
