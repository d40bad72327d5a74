//! Platform configuration
//!
//! One aggregated settings document for the foundation components,
//! stored as JSON through [`JsonStore`].

use serde::{Deserialize, Serialize};

use crate::audit::AuditConfig;
use crate::cache::TtlCacheConfig;
use crate::ratelimit::RateLimiterConfig;
use crate::storage::JsonStore;
use crate::Result;

/// Settings file name inside the store's base directory
pub const PLATFORM_CONFIG_FILE: &str = "platform.json";

/// Aggregated TutorForge settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub cache: TtlCacheConfig,

    #[serde(default)]
    pub ratelimit: RateLimiterConfig,

    #[serde(default)]
    pub audit: AuditConfig,
}

impl PlatformConfig {
    /// Load settings, falling back to defaults for anything absent
    pub async fn load(store: &JsonStore) -> Self {
        store.load_or_default(PLATFORM_CONFIG_FILE).await
    }

    pub async fn save(&self, store: &JsonStore) -> Result<()> {
        store.save(PLATFORM_CONFIG_FILE, self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let config = PlatformConfig::load(&store).await;
        assert_eq!(config.ratelimit.delay_ms, 1000);
        assert!(config.audit.enabled);
    }

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let mut config = PlatformConfig::default();
        config.ratelimit.delay_ms = 250;
        config.cache.sweep_every = 3;
        config.save(&store).await.unwrap();

        let loaded = PlatformConfig::load(&store).await;
        assert_eq!(loaded.ratelimit.delay_ms, 250);
        assert_eq!(loaded.cache.sweep_every, 3);
    }

    #[tokio::test]
    async fn test_partial_document_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(
            store.file_path(PLATFORM_CONFIG_FILE),
            r#"{"ratelimit": {"delay_ms": 50}}"#,
        )
        .unwrap();

        let config = PlatformConfig::load(&store).await;
        assert_eq!(config.ratelimit.delay_ms, 50);
        assert_eq!(config.cache.sweep_every, 10);
    }
}
