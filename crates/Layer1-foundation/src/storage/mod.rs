//! Storage module for TutorForge
//!
//! - `json`: whole-document JSON file store

mod json;

pub use json::JsonStore;
