//! Qualification sizes for the 2010 BTEC Nationals.
//!
//! A qualification is identified purely by how many units the learner took.
//! The mapping is a fixed table; any unit total outside it is `Unknown`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// A known BTEC National award size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualificationType {
    /// 30 credits, 3 units.
    Certificate,
    /// 60 credits, 6 units.
    SubsidiaryDiploma,
    /// 90 credits, 9 units.
    #[serde(rename = "90CreditDiploma")]
    NinetyCreditDiploma,
    /// 120 credits, 12 units.
    Diploma,
    /// 180 credits, 18 units.
    ExtendedDiploma,
}

/// Unit total for each award size, smallest first.
pub const QUALIFICATIONS_BY_UNITS: [(u64, QualificationType); 5] = [
    (3, QualificationType::Certificate),
    (6, QualificationType::SubsidiaryDiploma),
    (9, QualificationType::NinetyCreditDiploma),
    (12, QualificationType::Diploma),
    (18, QualificationType::ExtendedDiploma),
];

impl QualificationType {
    /// All award sizes in ascending unit order.
    pub const ALL: [QualificationType; 5] = [
        QualificationType::Certificate,
        QualificationType::SubsidiaryDiploma,
        QualificationType::NinetyCreditDiploma,
        QualificationType::Diploma,
        QualificationType::ExtendedDiploma,
    ];

    /// Look up the award size for a unit total.
    pub fn from_unit_total(units: u64) -> Option<Self> {
        QUALIFICATIONS_BY_UNITS
            .iter()
            .find(|(count, _)| *count == units)
            .map(|(_, qualification)| *qualification)
    }

    /// Number of units that make up this award.
    pub fn unit_total(&self) -> u64 {
        match self {
            QualificationType::Certificate => 3,
            QualificationType::SubsidiaryDiploma => 6,
            QualificationType::NinetyCreditDiploma => 9,
            QualificationType::Diploma => 12,
            QualificationType::ExtendedDiploma => 18,
        }
    }

    /// Internal identifier, also the name of the reference table for this award.
    pub fn as_str(&self) -> &'static str {
        match self {
            QualificationType::Certificate => "Certificate",
            QualificationType::SubsidiaryDiploma => "SubsidiaryDiploma",
            QualificationType::NinetyCreditDiploma => "90CreditDiploma",
            QualificationType::Diploma => "Diploma",
            QualificationType::ExtendedDiploma => "ExtendedDiploma",
        }
    }

    /// Human-readable name with spaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            QualificationType::Certificate => "Certificate",
            QualificationType::SubsidiaryDiploma => "Subsidiary Diploma",
            QualificationType::NinetyCreditDiploma => "90 Credit Diploma",
            QualificationType::Diploma => "Diploma",
            QualificationType::ExtendedDiploma => "Extended Diploma",
        }
    }
}

impl fmt::Display for QualificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for QualificationType {
    type Err = ModelError;

    /// Accepts the internal identifier or the display name, ignoring case,
    /// spaces, hyphens and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "CERTIFICATE" => Ok(QualificationType::Certificate),
            "SUBSIDIARYDIPLOMA" => Ok(QualificationType::SubsidiaryDiploma),
            "90CREDITDIPLOMA" | "NINETYCREDITDIPLOMA" => Ok(QualificationType::NinetyCreditDiploma),
            "DIPLOMA" => Ok(QualificationType::Diploma),
            "EXTENDEDDIPLOMA" => Ok(QualificationType::ExtendedDiploma),
            _ => Err(ModelError::UnknownQualificationName(s.to_string())),
        }
    }
}

/// Result of classifying a unit total.
///
/// `Unknown` is terminal: nothing downstream accepts it, so an unknown award
/// can never be used to query a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    Known(QualificationType),
    Unknown { unit_total: u64 },
}

impl Qualification {
    pub fn from_unit_total(unit_total: u64) -> Self {
        match QualificationType::from_unit_total(unit_total) {
            Some(qualification) => Qualification::Known(qualification),
            None => Qualification::Unknown { unit_total },
        }
    }

    /// The known award, if any.
    pub fn known(&self) -> Option<QualificationType> {
        match self {
            Qualification::Known(qualification) => Some(*qualification),
            Qualification::Unknown { .. } => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Qualification::Known(qualification) => qualification.display_name(),
            Qualification::Unknown { .. } => "Unknown qualification",
        }
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_totals_round_trip() {
        for qualification in QualificationType::ALL {
            assert_eq!(
                QualificationType::from_unit_total(qualification.unit_total()),
                Some(qualification)
            );
        }
    }

    #[test]
    fn test_unlisted_totals_are_unknown() {
        for units in [0, 1, 2, 4, 5, 7, 10, 15, 17, 19, 36] {
            assert_eq!(
                Qualification::from_unit_total(units),
                Qualification::Unknown { unit_total: units }
            );
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            QualificationType::NinetyCreditDiploma.display_name(),
            "90 Credit Diploma"
        );
        assert_eq!(
            QualificationType::SubsidiaryDiploma.to_string(),
            "Subsidiary Diploma"
        );
        assert_eq!(
            Qualification::Unknown { unit_total: 4 }.display_name(),
            "Unknown qualification"
        );
    }

    #[test]
    fn test_qualification_from_str() {
        assert_eq!(
            "90CreditDiploma".parse::<QualificationType>().unwrap(),
            QualificationType::NinetyCreditDiploma
        );
        assert_eq!(
            "extended diploma".parse::<QualificationType>().unwrap(),
            QualificationType::ExtendedDiploma
        );
        assert_eq!(
            "subsidiary-diploma".parse::<QualificationType>().unwrap(),
            QualificationType::SubsidiaryDiploma
        );
        assert!("Certificate; DROP TABLE".parse::<QualificationType>().is_err());
    }

    #[test]
    fn test_serialized_name_matches_identifier() {
        for qualification in QualificationType::ALL {
            let json = serde_json::to_value(qualification).unwrap();
            assert_eq!(json, qualification.as_str());
            let parsed: QualificationType = serde_json::from_value(json).unwrap();
            assert_eq!(parsed, qualification);
        }
    }
}
