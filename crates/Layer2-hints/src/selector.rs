//! Hint selection
//!
//! Deterministic, memoized derivation of the hint tiers a proficiency
//! level may see. Results are cached per (problem, level) pair and
//! force-flushed on write, so a repeat request never recomputes and
//! survives a restart.

use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use tutor_foundation::cache::{TtlCache, TtlCacheStats};

use crate::level::ProficiencyLevel;
use crate::policy;
use crate::stage::DisclosureStage;
use crate::types::{RawHintSet, SelectionResult, StageHint};

const KEY_SEPARATOR: &str = "::";

/// Collision-free cache key for a (problem, level?, stage?) triple
///
/// Every optional dimension carries its own tag, so distinct triples
/// can never concatenate to the same key.
pub fn generate_key(
    problem_id: &str,
    level: Option<ProficiencyLevel>,
    stage: Option<DisclosureStage>,
) -> String {
    let mut parts = vec![problem_id.to_string()];
    if let Some(level) = level {
        parts.push(format!("level_{}", level.name()));
    }
    if let Some(stage) = stage {
        parts.push(format!("stage_{}", stage.number()));
    }
    parts.join(KEY_SEPARATOR)
}

/// Memoizing hint selector
///
/// Owns an injected [`TtlCache`] so tests and multi-tenant hosts can
/// run isolated instances.
#[derive(Debug)]
pub struct HintSelector {
    cache: TtlCache,
}

impl HintSelector {
    pub fn new(cache: TtlCache) -> Self {
        Self { cache }
    }

    /// The full set of stages and hint text visible to a level
    ///
    /// On a cache hit the stored result is returned verbatim, original
    /// timestamp included. Never fails; the worst case is an empty
    /// hints map.
    pub async fn select_hints(
        &mut self,
        problem_id: &str,
        level: ProficiencyLevel,
        raw: &RawHintSet,
    ) -> SelectionResult {
        let key = generate_key(problem_id, Some(level), None);

        if let Some(cached) = self.cache.get(&key).await {
            match serde_json::from_value::<SelectionResult>(cached) {
                Ok(result) => {
                    debug!(problem_id, level = %level, "Selection served from cache");
                    return result;
                }
                Err(e) => {
                    warn!(error = %e, key, "Cached selection unreadable, recomputing");
                }
            }
        }

        let available_stages = policy::visible_stages(level).to_vec();
        let mut hints = BTreeMap::new();
        for stage in &available_stages {
            if let Some(text) = raw.stage(*stage) {
                hints.insert(stage.key().to_string(), text.to_string());
            }
        }

        let result = SelectionResult {
            problem_id: problem_id.to_string(),
            level,
            available_stages,
            hints,
            timestamp: Utc::now(),
        };

        match serde_json::to_value(&result) {
            Ok(value) => {
                self.cache.set(key, value).await;
                self.cache.force_save().await;
            }
            Err(e) => warn!(error = %e, problem_id, "Selection result not cacheable"),
        }

        debug!(
            problem_id,
            level = %level,
            stages = result.available_stages.len(),
            hints = result.hints.len(),
            "Selection computed"
        );
        result
    }

    /// A single stage's hint text, gated by the level's policy
    ///
    /// Denials and missing content are distinct outcomes; only found
    /// text is cached.
    pub async fn hint_by_stage(
        &mut self,
        problem_id: &str,
        level: ProficiencyLevel,
        stage: DisclosureStage,
        raw: &RawHintSet,
    ) -> StageHint {
        if !policy::allows(level, stage) {
            warn!(
                problem_id,
                level = %level,
                stage = stage.number(),
                "Stage not visible to level"
            );
            return StageHint::Denied;
        }

        let key = generate_key(problem_id, Some(level), Some(stage));

        if let Some(cached) = self.cache.get(&key).await {
            if let Some(text) = cached.as_str() {
                return StageHint::Found(text.to_string());
            }
            warn!(key, "Cached stage hint is not a string, recomputing");
        }

        let Some(text) = raw.stage(stage) else {
            return StageHint::Empty;
        };
        let text = text.to_string();

        self.cache.set(key, Value::String(text.clone())).await;
        self.cache.force_save().await;
        StageHint::Found(text)
    }

    /// Statistics of the underlying cache
    pub fn cache_stats(&self) -> TtlCacheStats {
        self.cache.stats()
    }

    /// Drop every memoized selection
    pub async fn clear_cache(&mut self) {
        self.cache.clear().await;
    }
}
