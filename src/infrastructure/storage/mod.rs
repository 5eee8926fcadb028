//! Storage backends for URL mappings.
//!
//! Both implement [`UrlStore`]:
//! - [`MemoryStore`] - In-process map behind a reader/writer lock
//! - [`RedisStore`] - Redis with a fixed per-key TTL

mod memory_store;
mod redis_store;

pub use crate::domain::repositories::{StoreError, StoreResult, UrlStore};
pub use memory_store::MemoryStore;
pub use redis_store::{DEFAULT_TTL_SECONDS, KEY_PREFIX, RedisStore};
