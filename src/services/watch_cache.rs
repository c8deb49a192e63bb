//! In-memory watch cache
//!
//! Process-wide map from flight code to the last resolved status. Written
//! by every scan, read by every poll, gone at process exit. No eviction,
//! no capacity bound; concurrent writes to the same key race and the last
//! completed write wins, which is fine for a best-effort cache.

use crate::models::{FlightStatus, WatchEntry};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared watch cache handle, cheap to clone
#[derive(Clone, Default)]
pub struct WatchCache {
    entries: Arc<RwLock<HashMap<String, WatchEntry>>>,
}

impl WatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest status for `code`, stamping the current time.
    ///
    /// Unconditional overwrite; callers pass normalized uppercase codes.
    pub async fn put(&self, code: &str, status: FlightStatus) {
        let entry = WatchEntry {
            status,
            last_update: Utc::now(),
        };
        self.entries.write().await.insert(code.to_string(), entry);
    }

    /// Fetch entries for the requested codes, in request order.
    ///
    /// Codes with no cached entry are silently omitted, never an error.
    pub async fn get_many(&self, codes: &[String]) -> Vec<(String, WatchEntry)> {
        let entries = self.entries.read().await;
        codes
            .iter()
            .filter_map(|code| entries.get(code).map(|entry| (code.clone(), entry.clone())))
            .collect()
    }

    /// Number of watched flights.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_cache_returns_nothing() {
        let cache = WatchCache::new();
        assert!(cache.get_many(&codes(&["AF1234", "KL808"])).await.is_empty());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn put_then_get_returns_exactly_that_entry() {
        let cache = WatchCache::new();
        let before = Utc::now();
        cache.put("AF1234", FlightStatus::not_found()).await;
        let after = Utc::now();

        let found = cache.get_many(&codes(&["AF1234"])).await;
        assert_eq!(found.len(), 1);
        let (code, entry) = &found[0];
        assert_eq!(code, "AF1234");
        assert_eq!(entry.status.raw_status, "unknown");
        assert!(entry.last_update >= before && entry.last_update <= after);
    }

    #[tokio::test]
    async fn unknown_codes_are_silently_omitted() {
        let cache = WatchCache::new();
        cache.put("AF1234", FlightStatus::not_found()).await;

        let found = cache.get_many(&codes(&["U2567", "AF1234", "KL808"])).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "AF1234");
    }

    #[tokio::test]
    async fn overwrite_replaces_entry_and_restamps() {
        let cache = WatchCache::new();
        cache.put("AF1234", FlightStatus::not_found()).await;
        let first = cache.get_many(&codes(&["AF1234"])).await[0].1.clone();

        cache.put("AF1234", FlightStatus::provider_error()).await;
        let second = cache.get_many(&codes(&["AF1234"])).await[0].1.clone();

        assert_eq!(second.status.raw_status, "error");
        assert!(second.last_update >= first.last_update);
        assert_eq!(cache.len().await, 1);
    }
}
