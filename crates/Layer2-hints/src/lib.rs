//! # tutor-hints
//!
//! Adaptive content disclosure for tiered problem hints:
//! - `ProficiencyLevel`: caller-declared classification
//! - `DisclosureStage`: three escalating-specificity hint tiers
//! - `policy`: which stages each level may see
//! - `HintSelector`: memoized selection on top of `TtlCache`
//!
//! The level gating is a content-tiering convenience, not a security
//! boundary.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tutor_foundation::cache::{TtlCache, TtlCacheConfig};
//! use tutor_hints::{HintSelector, ProficiencyLevel, RawHintSet};
//!
//! let cache = TtlCache::with_config(TtlCacheConfig::default());
//! let mut selector = HintSelector::new(cache);
//!
//! let result = selector
//!     .select_hints("problem_42", ProficiencyLevel::Advanced, &raw)
//!     .await;
//! ```

pub mod error;
pub mod level;
pub mod policy;
pub mod selector;
pub mod stage;
pub mod types;

// ============================================================================
// Error
// ============================================================================
pub use error::HintError;

// ============================================================================
// Enums
// ============================================================================
pub use level::ProficiencyLevel;
pub use stage::DisclosureStage;

// ============================================================================
// Policy & selection
// ============================================================================
pub use policy::{allows, visible_stages};
pub use selector::{generate_key, HintSelector};
pub use types::{RawHintSet, SelectionResult, StageHint};
