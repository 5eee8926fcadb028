//! Storage trait definitions for the domain layer.
//!
//! The [`UrlStore`] trait abstracts the code → URL mapping. Concrete backends
//! live in `crate::infrastructure::storage` and are selected at startup.
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod url_store;

pub use url_store::{StoreError, StoreResult, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
