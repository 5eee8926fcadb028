#![allow(dead_code)]

use async_trait::async_trait;
use shortly::domain::repositories::{StoreError, StoreResult, UrlStore};
use shortly::infrastructure::storage::MemoryStore;
use shortly::state::AppState;
use std::sync::Arc;

pub const TEST_HOST: &str = "s.example.com";

/// State over a fresh in-memory store, returned alongside the store so tests
/// can seed or inspect mappings directly.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), None);
    (state, store)
}

pub fn create_state_with_store(store: Arc<dyn UrlStore>) -> AppState {
    AppState::new(store, None)
}

/// Store whose every operation fails, as if the backend were down.
pub struct FailingStore;

#[async_trait]
impl UrlStore for FailingStore {
    async fn store_url(&self, _code: &str, _long_url: &str) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn get_url(&self, _code: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

/// Store that reads fine but rejects every write.
pub struct ReadOnlyStore;

#[async_trait]
impl UrlStore for ReadOnlyStore {
    async fn store_url(&self, _code: &str, _long_url: &str) -> StoreResult<()> {
        Err(StoreError::Connection("read only".to_string()))
    }

    async fn get_url(&self, _code: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "read-only"
    }
}
