//! Hint layer errors

use thiserror::Error;

/// Validation errors for the closed level/stage sets
///
/// These are the only places this layer raises instead of returning a
/// tagged outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("Invalid proficiency level '{value}' (expected one of: beginner, intermediate, advanced)")]
    InvalidLevel { value: String },

    #[error("Invalid disclosure stage {value} (expected 1, 2 or 3)")]
    InvalidStage { value: u8 },
}
