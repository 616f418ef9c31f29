//! Unit scoring.
//!
//! Every unit is worth `UNIT_VALUE` points scaled by the level it was
//! achieved at: pass ×7, merit ×8, distinction ×9.

use serde::{Deserialize, Serialize};

use crate::qualification::Qualification;

/// Base value of a single unit.
pub const UNIT_VALUE: u64 = 10;
pub const PASS_MULTIPLIER: u64 = 7;
pub const MERIT_MULTIPLIER: u64 = 8;
pub const DISTINCTION_MULTIPLIER: u64 = 9;

/// Numeric BTEC score for a set of units.
pub type NumericScore = u64;

/// Number of units achieved at each level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitCounts {
    pub pass: u32,
    pub merit: u32,
    pub distinction: u32,
}

impl UnitCounts {
    pub fn new(pass: u32, merit: u32, distinction: u32) -> Self {
        Self {
            pass,
            merit,
            distinction,
        }
    }

    /// Total number of units taken.
    pub fn total(&self) -> u64 {
        u64::from(self.pass) + u64::from(self.merit) + u64::from(self.distinction)
    }

    pub fn score(&self) -> NumericScore {
        u64::from(self.pass) * PASS_MULTIPLIER * UNIT_VALUE
            + u64::from(self.merit) * MERIT_MULTIPLIER * UNIT_VALUE
            + u64::from(self.distinction) * DISTINCTION_MULTIPLIER * UNIT_VALUE
    }

    pub fn qualification(&self) -> Qualification {
        Qualification::from_unit_total(self.total())
    }
}

/// Classify the units into an award size and compute their score.
///
/// Total for every input; the score is computed even when the award is
/// unknown so callers can report it.
pub fn classify_and_score(pass: u32, merit: u32, distinction: u32) -> (Qualification, NumericScore) {
    let units = UnitCounts::new(pass, merit, distinction);
    (units.qualification(), units.score())
}
