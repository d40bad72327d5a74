//! # TutorForge Cache System
//!
//! Durable TTL-based memoization for derived results.
//!
//! ## Design Principles
//!
//! 1. **Lazy expiry** - expired entries are evicted on access, plus an
//!    amortized sweep every N reads; no background timer
//! 2. **Batched durability** - flushes follow an explicit
//!    [`FlushPolicy`] rather than a hidden constant
//! 3. **Derived data only** - the backing file is a whole-document
//!    snapshot; losing a flush cycle is recoverable by recomputation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tutor_foundation::cache::{TtlCache, TtlCacheConfig};
//!
//! let mut cache = TtlCache::with_config(TtlCacheConfig::default());
//!
//! cache.set("problem_42::level_beginner", value).await;
//! if let Some(hit) = cache.get("problem_42::level_beginner").await {
//!     return hit;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - cache configuration and flush policy
//! - [`entry`] - a single cached value with TTL bookkeeping
//! - [`store`] - the cache store itself

pub mod config;
pub mod entry;
pub mod store;

pub use config::{FlushPolicy, TtlCacheConfig};
pub use entry::CacheEntry;
pub use store::{CacheCounters, TtlCache, TtlCacheStats};
