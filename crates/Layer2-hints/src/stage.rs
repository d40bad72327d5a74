//! Disclosure stages

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HintError;

/// One of three escalating-specificity hint tiers
///
/// Stage 1 is the most revealing, stage 3 the terse nudge. Serializes
/// as its number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum DisclosureStage {
    /// Stage 1 - worked, concrete direction
    Detailed = 1,
    /// Stage 2 - narrows the approach
    Guided = 2,
    /// Stage 3 - terse nudge
    Nudge = 3,
}

impl DisclosureStage {
    pub const ALL: [DisclosureStage; 3] = [
        DisclosureStage::Detailed,
        DisclosureStage::Guided,
        DisclosureStage::Nudge,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(value: u8) -> Result<Self, HintError> {
        match value {
            1 => Ok(DisclosureStage::Detailed),
            2 => Ok(DisclosureStage::Guided),
            3 => Ok(DisclosureStage::Nudge),
            _ => Err(HintError::InvalidStage { value }),
        }
    }

    /// Map key used in raw hint sets and selection results
    pub fn key(&self) -> &'static str {
        match self {
            DisclosureStage::Detailed => "stage_1",
            DisclosureStage::Guided => "stage_2",
            DisclosureStage::Nudge => "stage_3",
        }
    }
}

impl From<DisclosureStage> for u8 {
    fn from(stage: DisclosureStage) -> Self {
        stage.number()
    }
}

impl TryFrom<u8> for DisclosureStage {
    type Error = HintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DisclosureStage::from_number(value)
    }
}

impl fmt::Display for DisclosureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stage {}", self.number())
    }
}
