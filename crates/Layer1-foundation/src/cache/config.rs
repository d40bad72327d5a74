//! Cache configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// When the in-memory store is flushed to its backing file
///
/// `EveryN(n)` trades durability for write amplification: a crash
/// between flushes loses up to n-1 of the most recent writes. Cache
/// contents are derived data, never the sole record of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlushPolicy {
    /// Persist on every write
    Immediate,
    /// Persist once every N writes
    EveryN(u32),
    /// Persist when at least this many seconds passed since the last flush
    IntervalSecs(u64),
}

/// TTL cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtlCacheConfig {
    /// Snapshot file name inside the base directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Base directory; the platform data directory when unset
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Default TTL in seconds applied by `set`; `None` retains forever
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: Option<u64>,

    /// Durable flush policy
    #[serde(default = "default_flush")]
    pub flush: FlushPolicy,

    /// Run a full expiry sweep every this many `get` calls
    #[serde(default = "default_sweep_every")]
    pub sweep_every: u32,
}

// Default value functions
fn default_file_name() -> String {
    "hint_cache.json".to_string()
}
fn default_ttl_secs() -> Option<u64> {
    Some(24 * 60 * 60)
} // 1 day
fn default_flush() -> FlushPolicy {
    FlushPolicy::EveryN(5)
}
fn default_sweep_every() -> u32 {
    10
}

impl Default for TtlCacheConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            base_dir: None,
            default_ttl_secs: default_ttl_secs(),
            flush: default_flush(),
            sweep_every: default_sweep_every(),
        }
    }
}

impl TtlCacheConfig {
    /// Config rooted at an explicit directory (tests, multi-tenant hosts)
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Default TTL as a Duration
    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl_secs.map(Duration::from_secs)
    }

    /// Directory the snapshot file lives in
    pub fn resolve_base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tutorforge")
        })
    }
}
