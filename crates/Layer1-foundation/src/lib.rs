//! # tutor-foundation
//!
//! Foundation layer for TutorForge:
//! - Storage: `JsonStore` (whole-document JSON files)
//! - Cache: `TtlCache` (durable TTL memoization with batched flushes)
//! - Ratelimit: `RateLimiter` (minimum spacing + sliding-window cap)
//! - Audit: append-only JSONL activity log
//! - Config: `PlatformConfig` (aggregated settings)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Layer2-hints (selection policy)                        │
//! │        │                                                │
//! │        ▼                                                │
//! │  TtlCache ──► JsonStore ──► snapshot file               │
//! │                                                         │
//! │  RateLimiter (independent, gates external calls)        │
//! │  AuditLogger (independent, append-only JSONL)           │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod audit;
pub mod cache;
pub mod config;
pub mod error;
pub mod ratelimit;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Storage
// ============================================================================
pub use storage::JsonStore;

// ============================================================================
// Cache
// ============================================================================
pub use cache::{CacheCounters, CacheEntry, FlushPolicy, TtlCache, TtlCacheConfig, TtlCacheStats};

// ============================================================================
// Rate limiting
// ============================================================================
pub use ratelimit::{RateLimiter, RateLimiterConfig, RateLimiterStats};

// ============================================================================
// Audit
// ============================================================================
pub use audit::{AuditConfig, AuditEntry, AuditLevel, AuditLogger};

// ============================================================================
// Config
// ============================================================================
pub use config::{PlatformConfig, PLATFORM_CONFIG_FILE};
