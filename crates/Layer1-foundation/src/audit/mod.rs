//! Audit System - append-only activity log
//!
//! Records noteworthy events as one JSON line each. Writes happen on a
//! background task; a failed write is reported through `tracing` and
//! never reaches the caller that produced the entry.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    AuditLogger                        │
//! │  log(level, category, msg, meta) ──► mpsc ──► file   │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod logger;
pub mod types;

// Re-exports
pub use logger::{AuditConfig, AuditLogger};
pub use types::{AuditEntry, AuditLevel};
