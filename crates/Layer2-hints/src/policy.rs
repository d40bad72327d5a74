//! Disclosure policy
//!
//! Which stages each proficiency level may see. Lower proficiency sees
//! more: a beginner gets every tier, an advanced requester only the
//! terse nudge. Every level keeps stage 3.

use crate::level::ProficiencyLevel;
use crate::stage::DisclosureStage;

/// Stages visible to a level, most revealing first
pub fn visible_stages(level: ProficiencyLevel) -> &'static [DisclosureStage] {
    use DisclosureStage::{Detailed, Guided, Nudge};

    match level {
        ProficiencyLevel::Beginner => &[Detailed, Guided, Nudge],
        ProficiencyLevel::Intermediate => &[Guided, Nudge],
        ProficiencyLevel::Advanced => &[Nudge],
    }
}

/// Whether a stage is visible to a level
pub fn allows(level: ProficiencyLevel, stage: DisclosureStage) -> bool {
    visible_stages(level).contains(&stage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_policy_is_a_nonempty_suffix() {
        for level in ProficiencyLevel::ALL {
            let stages = visible_stages(level);
            assert!(!stages.is_empty());

            // Suffix of [1, 2, 3]
            let offset = DisclosureStage::ALL.len() - stages.len();
            assert_eq!(stages, &DisclosureStage::ALL[offset..]);
        }
    }

    #[test]
    fn test_every_level_keeps_the_nudge() {
        for level in ProficiencyLevel::ALL {
            assert!(allows(level, DisclosureStage::Nudge));
        }
    }

    #[test]
    fn test_visibility_strictly_shrinks_with_proficiency() {
        let beginner = visible_stages(ProficiencyLevel::Beginner);
        let intermediate = visible_stages(ProficiencyLevel::Intermediate);
        let advanced = visible_stages(ProficiencyLevel::Advanced);

        assert!(beginner.len() > intermediate.len());
        assert!(intermediate.len() > advanced.len());

        for stage in intermediate {
            assert!(beginner.contains(stage));
        }
        for stage in advanced {
            assert!(intermediate.contains(stage));
        }
    }

    #[test]
    fn test_detailed_stage_is_beginner_only() {
        assert!(allows(ProficiencyLevel::Beginner, DisclosureStage::Detailed));
        assert!(!allows(
            ProficiencyLevel::Intermediate,
            DisclosureStage::Detailed
        ));
        assert!(!allows(
            ProficiencyLevel::Advanced,
            DisclosureStage::Detailed
        ));
    }
}
