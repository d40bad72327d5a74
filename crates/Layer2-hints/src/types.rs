//! Hint data shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::level::ProficiencyLevel;
use crate::stage::DisclosureStage;

/// Caller-supplied tiered hint text for one problem
///
/// Stages may be absent. Empty or whitespace-only text counts as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHintSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_3: Option<String>,
}

impl RawHintSet {
    /// Text for a stage, if it carries non-empty content
    pub fn stage(&self, stage: DisclosureStage) -> Option<&str> {
        let text = match stage {
            DisclosureStage::Detailed => self.stage_1.as_deref(),
            DisclosureStage::Guided => self.stage_2.as_deref(),
            DisclosureStage::Nudge => self.stage_3.as_deref(),
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

/// The stages and hint text one (problem, level) pair may see
///
/// Created once on the first request, then replayed verbatim from the
/// cache; the timestamp identifies the original derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub problem_id: String,
    pub level: ProficiencyLevel,
    /// Most revealing first
    pub available_stages: Vec<DisclosureStage>,
    /// Keyed `"stage_N"`; only available stages with non-empty content.
    /// Absent stages are omitted, never empty strings.
    pub hints: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

/// Outcome of a single-stage request
///
/// Distinguishes a policy refusal from missing content, which the
/// flattened `Option` form cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageHint {
    /// Stage not visible to the level
    Denied,
    /// Stage visible but the raw set has no content for it
    Empty,
    Found(String),
}

impl StageHint {
    /// Collapse to the flat form for callers that treat both non-hit
    /// outcomes the same
    pub fn into_option(self) -> Option<String> {
        match self {
            StageHint::Found(text) => Some(text),
            StageHint::Denied | StageHint::Empty => None,
        }
    }
}
