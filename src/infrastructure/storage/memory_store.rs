//! In-process storage backend.

use super::{StoreResult, UrlStore};
use crate::domain::entities::Link;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// URL mappings held in a `HashMap` behind a single reader/writer lock.
///
/// Any number of concurrent readers may hold the lock; writers are exclusive.
/// Nothing survives a process restart.
///
/// Without a TTL (the default) entries live forever. With a TTL, expired
/// entries read as missing, are dropped lazily on lookup, and are swept in
/// bulk by [`MemoryStore::purge_expired`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, Link>>,
    ttl: Option<Duration>,
}

impl MemoryStore {
    /// Creates an unbounded store whose entries never expire.
    pub fn new() -> Self {
        debug!("Using in-memory store (no expiry)");
        Self::default()
    }

    /// Creates a store where every entry expires `ttl` after it was written.
    pub fn with_ttl(ttl: Duration) -> Self {
        debug!("Using in-memory store (TTL: {}s)", ttl.num_seconds());
        Self {
            inner: RwLock::new(HashMap::new()),
            ttl: Some(ttl),
        }
    }

    /// Returns the configured TTL, if any.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Removes all expired entries and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let now = Utc::now();
        let mut map = self.write();
        let before = map.len();
        map.retain(|_, link| !link.is_expired_at(now));
        before - map.len()
    }

    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The map only holds plain data, so a panic in another holder cannot
    // leave it in a broken state.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Link>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Link>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn store_url(&self, code: &str, long_url: &str) -> StoreResult<()> {
        let link = Link::new(code.to_string(), long_url.to_string(), self.ttl);
        self.write().insert(code.to_string(), link);
        debug!("Store SET: {} -> {}", code, long_url);
        Ok(())
    }

    async fn get_url(&self, code: &str) -> StoreResult<Option<String>> {
        let expired = match self.read().get(code) {
            Some(link) if !link.is_expired() => {
                debug!("Store HIT: {}", code);
                return Ok(Some(link.long_url.clone()));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            let mut map = self.write();
            // Re-check under the write lock: the entry may have been rewritten.
            if map.get(code).is_some_and(Link::is_expired) {
                map.remove(code);
                debug!("Store EXPIRED: {}", code);
            } else if let Some(link) = map.get(code) {
                return Ok(Some(link.long_url.clone()));
            }
        }

        debug!("Store MISS: {}", code);
        Ok(None)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_get() {
        let store = MemoryStore::new();

        store
            .store_url("abcd1234", "https://example.com")
            .await
            .unwrap();

        let url = store.get_url("abcd1234").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_get_missing_code() {
        let store = MemoryStore::new();
        assert_eq!(store.get_url("missing0").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_overwrites() {
        let store = MemoryStore::new();

        store.store_url("abcd1234", "https://a.com").await.unwrap();
        store.store_url("abcd1234", "https://b.com").await.unwrap();

        assert_eq!(
            store.get_url("abcd1234").await.unwrap().as_deref(),
            Some("https://b.com")
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_store_is_idempotent() {
        let store = MemoryStore::new();

        store.store_url("abcd1234", "https://a.com").await.unwrap();
        store.store_url("abcd1234", "https://a.com").await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get_url("abcd1234").await.unwrap().as_deref(),
            Some("https://a.com")
        );
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_missing_and_is_removed() {
        let store = MemoryStore::with_ttl(Duration::seconds(-1));

        store.store_url("abcd1234", "https://a.com").await.unwrap();
        assert_eq!(store.len(), 1);

        assert_eq!(store.get_url("abcd1234").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_entry_within_ttl_is_returned() {
        let store = MemoryStore::with_ttl(Duration::hours(1));

        store.store_url("abcd1234", "https://a.com").await.unwrap();
        assert_eq!(
            store.get_url("abcd1234").await.unwrap().as_deref(),
            Some("https://a.com")
        );
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let store = MemoryStore::with_ttl(Duration::seconds(-1));
        store.store_url("aaaa1111", "https://a.com").await.unwrap();
        store.store_url("bbbb2222", "https://b.com").await.unwrap();

        assert_eq!(store.purge_expired(), 2);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_purge_without_ttl_is_noop() {
        let store = MemoryStore::new();
        store.store_url("aaaa1111", "https://a.com").await.unwrap();

        assert_eq!(store.purge_expired(), 0);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_health_check_and_name() {
        let store = MemoryStore::new();
        assert!(store.health_check().await);
        assert_eq!(store.backend_name(), "memory");
        assert!(store.ttl().is_none());
    }
}
