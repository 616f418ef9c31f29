#![deny(unsafe_code)]

pub mod error;
pub mod grade;
pub mod qualification;
pub mod scoring;

pub use error::{ModelError, Result};
pub use grade::{AdmissionsPoints, LetterGrade};
pub use qualification::{QUALIFICATIONS_BY_UNITS, Qualification, QualificationType};
pub use scoring::{NumericScore, UnitCounts, classify_and_score};
