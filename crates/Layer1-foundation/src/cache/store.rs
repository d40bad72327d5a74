//! TTL cache store
//!
//! Process-wide key → JSON value store with per-entry time-to-live,
//! lazy expiry, hit/miss/eviction statistics and batched persistence
//! through a [`JsonStore`] snapshot file.
//!
//! Persistence failures never propagate: a failed flush leaves the
//! cache memory-only for that cycle, and a missing or corrupt snapshot
//! on load starts an empty store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use super::config::{FlushPolicy, TtlCacheConfig};
use super::entry::CacheEntry;
use crate::storage::JsonStore;

/// Persisted hit/miss/save/eviction counters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CacheCounters {
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub misses: u64,
    #[serde(default)]
    pub saves: u64,
    #[serde(default)]
    pub evictions: u64,
}

/// Whole-document layout of the snapshot file
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheSnapshot {
    items: Vec<CacheEntry>,
    stats: CacheCounters,
    last_saved: DateTime<Utc>,
}

/// Cache statistics as reported to callers
#[derive(Debug, Clone)]
pub struct TtlCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub saves: u64,
    pub evictions: u64,
    pub size: usize,
    /// `"{:.2}%"` of hits over lookups, `"0%"` before any lookup
    pub hit_rate: String,
}

/// Durable TTL cache
///
/// The snapshot is loaded lazily on first use and overwritten wholesale
/// on every flush. Two processes flushing concurrently race; the last
/// writer's snapshot wins. Tolerable because contents are re-derivable.
#[derive(Debug)]
pub struct TtlCache {
    config: TtlCacheConfig,
    store: JsonStore,
    entries: HashMap<String, CacheEntry>,
    counters: CacheCounters,
    initialized: bool,
    pending_writes: u32,
    gets_since_sweep: u32,
    last_saved: Option<DateTime<Utc>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::with_config(TtlCacheConfig::default())
    }

    pub fn with_config(config: TtlCacheConfig) -> Self {
        let store = JsonStore::new(config.resolve_base_dir());
        Self {
            config,
            store,
            entries: HashMap::new(),
            counters: CacheCounters::default(),
            initialized: false,
            pending_writes: 0,
            gets_since_sweep: 0,
            last_saved: None,
        }
    }

    /// Load the snapshot into memory. Idempotent; called lazily by
    /// every operation, so explicit use is optional.
    pub async fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        match self
            .store
            .load_optional::<CacheSnapshot>(&self.config.file_name)
            .await
        {
            Ok(Some(snapshot)) => {
                let now = Utc::now();
                let total = snapshot.items.len();
                for entry in snapshot.items {
                    if !entry.is_expired(now) {
                        self.entries.insert(entry.key.clone(), entry);
                    }
                }
                self.counters = snapshot.stats;
                self.last_saved = Some(snapshot.last_saved);
                debug!(
                    loaded = self.entries.len(),
                    total,
                    file = %self.config.file_name,
                    "Cache snapshot loaded"
                );
            }
            Ok(None) => {
                debug!(file = %self.config.file_name, "No cache snapshot, starting empty");
            }
            Err(e) => {
                warn!(
                    error = %e,
                    file = %self.config.file_name,
                    "Cache snapshot unreadable, starting empty"
                );
            }
        }
    }

    /// Look up a value, counting a hit or a miss
    ///
    /// An expired entry is evicted and reported as a miss. Every
    /// `sweep_every` lookups a full expiry sweep runs first, so entries
    /// nobody reads again still get evicted.
    pub async fn get(&mut self, key: &str) -> Option<Value> {
        self.init().await;

        self.gets_since_sweep += 1;
        if self.gets_since_sweep >= self.config.sweep_every.max(1) {
            self.gets_since_sweep = 0;
            self.cleanup().await;
        }

        let now = Utc::now();
        let expired = match self.entries.get(key) {
            None => {
                self.counters.misses += 1;
                return None;
            }
            Some(entry) => entry.is_expired(now),
        };

        if expired {
            self.entries.remove(key);
            self.counters.misses += 1;
            self.counters.evictions += 1;
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.touch(now);
        self.counters.hits += 1;
        Some(entry.value.clone())
    }

    /// Store a value under the configured default TTL
    pub async fn set(&mut self, key: impl Into<String>, value: Value) {
        let ttl = self.config.default_ttl();
        self.set_with_ttl(key, value, ttl).await;
    }

    /// Store a value with an explicit TTL
    ///
    /// `None` retains forever; `Some(Duration::ZERO)` expires on
    /// creation. Overwrites any existing entry and flushes per the
    /// configured [`FlushPolicy`].
    pub async fn set_with_ttl(
        &mut self,
        key: impl Into<String>,
        value: Value,
        ttl: Option<Duration>,
    ) {
        self.init().await;

        let key = key.into();
        let entry = CacheEntry::new(key.clone(), value, ttl);
        self.entries.insert(key, entry);
        self.counters.saves += 1;
        self.pending_writes += 1;

        if self.should_flush() {
            self.force_save().await;
        }
    }

    /// Existence check with lazy-expiry eviction
    ///
    /// Does not touch the hit/miss counters.
    pub async fn has(&mut self, key: &str) -> bool {
        self.init().await;

        let now = Utc::now();
        let expired = match self.entries.get(key) {
            None => return false,
            Some(entry) => entry.is_expired(now),
        };

        if expired {
            self.entries.remove(key);
            self.counters.evictions += 1;
            return false;
        }
        true
    }

    /// Remove one entry; persists immediately when something was removed
    pub async fn delete(&mut self, key: &str) -> bool {
        self.init().await;

        let removed = self.entries.remove(key).is_some();
        if removed {
            self.force_save().await;
        }
        removed
    }

    /// Remove all entries; persists immediately
    pub async fn clear(&mut self) {
        self.init().await;

        self.entries.clear();
        self.force_save().await;
    }

    /// Sweep and evict every currently-expired entry
    ///
    /// Persists only when something was evicted.
    pub async fn cleanup(&mut self) -> usize {
        self.init().await;

        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let evicted = before - self.entries.len();

        if evicted > 0 {
            self.counters.evictions += evicted as u64;
            debug!(evicted, "Expired cache entries swept");
            self.force_save().await;
        }
        evicted
    }

    /// Unconditional flush, bypassing the batching counter
    pub async fn force_save(&mut self) {
        self.init().await;

        let now = Utc::now();
        let snapshot = CacheSnapshot {
            items: self.entries.values().cloned().collect(),
            stats: self.counters,
            last_saved: now,
        };

        match self.store.save(&self.config.file_name, &snapshot).await {
            Ok(()) => {
                self.last_saved = Some(now);
                self.pending_writes = 0;
            }
            Err(e) => {
                warn!(
                    error = %e,
                    file = %self.config.file_name,
                    "Cache flush failed, keeping entries in memory"
                );
            }
        }
    }

    /// Current statistics
    pub fn stats(&self) -> TtlCacheStats {
        let lookups = self.counters.hits + self.counters.misses;
        let hit_rate = if lookups == 0 {
            "0%".to_string()
        } else {
            format!("{:.2}%", self.counters.hits as f64 / lookups as f64 * 100.0)
        };

        TtlCacheStats {
            hits: self.counters.hits,
            misses: self.counters.misses,
            saves: self.counters.saves,
            evictions: self.counters.evictions,
            size: self.entries.len(),
            hit_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &TtlCacheConfig {
        &self.config
    }

    fn should_flush(&self) -> bool {
        match self.config.flush {
            FlushPolicy::Immediate => true,
            FlushPolicy::EveryN(n) => self.pending_writes >= n.max(1),
            FlushPolicy::IntervalSecs(secs) => match self.last_saved {
                None => true,
                Some(at) => {
                    Utc::now().signed_duration_since(at)
                        >= chrono::Duration::seconds(secs as i64)
                }
            },
        }
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}
