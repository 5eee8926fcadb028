//! Storage trait for short code to URL mappings.

use async_trait::async_trait;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or the connection was lost.
    #[error("Store connection error: {0}")]
    Connection(String),

    /// The backend rejected or failed a command.
    #[error("Store backend error: {0}")]
    Backend(#[from] redis::RedisError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Concurrency-safe mapping from short code to original URL.
///
/// Once [`UrlStore::store_url`] returns `Ok`, [`UrlStore::get_url`] for the same
/// code observes the mapping until it is overwritten or expires.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::MemoryStore`] - In-process map behind a
///   reader/writer lock, optional TTL
/// - [`crate::infrastructure::storage::RedisStore`] - Redis with a fixed
///   per-key TTL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Inserts or overwrites the mapping for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend failed to persist the mapping.
    /// Implementations log the failure before returning it.
    async fn store_url(&self, code: &str, long_url: &str) -> StoreResult<()>;

    /// Looks up the original URL for `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the mapping exists and has not expired
    /// - `Ok(None)` if it was never stored, expired, or was removed
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend itself failed.
    async fn get_url(&self, code: &str) -> StoreResult<Option<String>>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name used in logs and health output.
    fn backend_name(&self) -> &'static str;
}
