//! A single cached value with TTL and access bookkeeping

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// One cached key/value pair
///
/// `ttl` is milliseconds. `None` never expires; `Some(0)` is expired
/// on creation (write-through without retention).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub key: String,
    pub value: Value,
    pub created_at: DateTime<Utc>,
    pub ttl: Option<u64>,
    pub accessed_at: DateTime<Utc>,
    pub access_count: u64,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, value: Value, ttl: Option<Duration>) -> Self {
        let now = Utc::now();
        Self {
            key: key.into(),
            value,
            created_at: now,
            ttl: ttl.map(|d| d.as_millis() as u64),
            accessed_at: now,
            access_count: 0,
        }
    }

    /// An entry is expired iff it has a TTL and its age exceeds it
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.ttl {
            None => false,
            Some(0) => true,
            Some(ttl_ms) => {
                now.signed_duration_since(self.created_at)
                    > chrono::Duration::milliseconds(ttl_ms as i64)
            }
        }
    }

    /// Record a successful read
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.accessed_at = now;
        self.access_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_ttl_never_expires() {
        let entry = CacheEntry::new("k", json!(1), None);
        let far_future = Utc::now() + chrono::Duration::days(365 * 10);
        assert!(!entry.is_expired(far_future));
    }

    #[test]
    fn test_zero_ttl_expires_on_creation() {
        let entry = CacheEntry::new("k", json!(1), Some(Duration::ZERO));
        assert!(entry.is_expired(Utc::now()));
    }

    #[test]
    fn test_ttl_boundary() {
        let entry = CacheEntry::new("k", json!(1), Some(Duration::from_millis(100)));
        let created = entry.created_at;

        assert!(!entry.is_expired(created + chrono::Duration::milliseconds(100)));
        assert!(entry.is_expired(created + chrono::Duration::milliseconds(101)));
    }

    #[test]
    fn test_touch_updates_access_bookkeeping() {
        let mut entry = CacheEntry::new("k", json!(1), None);
        assert_eq!(entry.access_count, 0);

        let later = Utc::now() + chrono::Duration::seconds(5);
        entry.touch(later);

        assert_eq!(entry.access_count, 1);
        assert_eq!(entry.accessed_at, later);
    }

    #[test]
    fn test_serde_field_names_are_camel_case() {
        let entry = CacheEntry::new("k", json!("v"), Some(Duration::from_secs(1)));
        let value = serde_json::to_value(&entry).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("accessedAt").is_some());
        assert_eq!(value.get("accessCount"), Some(&json!(0)));
        assert_eq!(value.get("ttl"), Some(&json!(1000)));
    }
}
