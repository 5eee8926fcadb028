//! Redis-backed storage implementation.

use super::{StoreError, StoreResult, UrlStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, info, warn};

/// Namespace prefix for every mapping key.
pub const KEY_PREFIX: &str = "url:";

/// TTL applied to every mapping when none is configured (24 hours).
pub const DEFAULT_TTL_SECONDS: u64 = 24 * 60 * 60;

/// Redis storage for URL mappings.
///
/// Every write sets the same fixed TTL, so memory stays bounded and recent
/// mappings survive a restart of this process. Uses `ConnectionManager`, which
/// reconnects transparently after transient failures.
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `ttl_seconds` - TTL applied to every mapping written through this store
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: KEY_PREFIX.to_string(),
        })
    }

    /// Connects with exponential backoff, giving up after `retries` extra attempts.
    ///
    /// # Errors
    ///
    /// Returns the error from the last attempt.
    pub async fn connect_with_retry(
        redis_url: &str,
        ttl_seconds: u64,
        retries: usize,
    ) -> StoreResult<Self> {
        let strategy = ExponentialBackoff::from_millis(8)
            .max_delay(Duration::from_millis(512))
            .map(jitter)
            .take(retries);

        Retry::spawn(strategy, move || async move {
            Self::connect(redis_url, ttl_seconds).await.inspect_err(|e| {
                warn!("Redis connection attempt failed: {}", e);
            })
        })
        .await
    }

    /// TTL in seconds applied on every write.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl UrlStore for RedisStore {
    async fn store_url(&self, code: &str, long_url: &str) -> StoreResult<()> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        match conn
            .set_ex::<_, _, ()>(&key, long_url, self.ttl_seconds)
            .await
        {
            Ok(_) => {
                debug!(
                    "Store SET: {} -> {} (TTL: {}s)",
                    code, long_url, self.ttl_seconds
                );
                Ok(())
            }
            Err(e) => {
                error!("Redis SET error for {}: {}", code, e);
                Err(StoreError::Backend(e))
            }
        }
    }

    async fn get_url(&self, code: &str) -> StoreResult<Option<String>> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!("Store HIT: {} -> {}", code, url);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Store MISS: {}", code);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", code, e);
                Err(StoreError::Backend(e))
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
