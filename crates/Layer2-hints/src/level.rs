//! Proficiency levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HintError;

/// Caller-declared proficiency classification
///
/// Governs which disclosure stages a requester may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    pub const ALL: [ProficiencyLevel; 3] = [
        ProficiencyLevel::Beginner,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
    ];

    /// Canonical lowercase name, also used in cache keys
    pub fn name(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
        }
    }

    /// Lenient parse: unknown values fall back to `Beginner`
    ///
    /// The fail-open default shows a beginner-level superset of hints,
    /// which can mask caller defects. Prefer the strict `FromStr` path
    /// at boundaries.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or(ProficiencyLevel::Beginner)
    }
}

impl FromStr for ProficiencyLevel {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ProficiencyLevel::Beginner),
            "intermediate" => Ok(ProficiencyLevel::Intermediate),
            "advanced" => Ok(ProficiencyLevel::Advanced),
            _ => Err(HintError::InvalidLevel {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        assert_eq!(
            "advanced".parse::<ProficiencyLevel>().unwrap(),
            ProficiencyLevel::Advanced
        );
        assert_eq!(
            " Beginner ".parse::<ProficiencyLevel>().unwrap(),
            ProficiencyLevel::Beginner
        );

        let err = "expert".parse::<ProficiencyLevel>().unwrap_err();
        assert_eq!(
            err,
            HintError::InvalidLevel {
                value: "expert".to_string()
            }
        );
        assert!(err.to_string().contains("beginner, intermediate, advanced"));
    }

    #[test]
    fn test_lenient_parse_falls_back_to_beginner() {
        assert_eq!(
            ProficiencyLevel::parse_lenient("expert"),
            ProficiencyLevel::Beginner
        );
        assert_eq!(
            ProficiencyLevel::parse_lenient("intermediate"),
            ProficiencyLevel::Intermediate
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ProficiencyLevel::Intermediate).unwrap();
        assert_eq!(json, r#""intermediate""#);

        let level: ProficiencyLevel = serde_json::from_str(r#""advanced""#).unwrap();
        assert_eq!(level, ProficiencyLevel::Advanced);
    }
}
