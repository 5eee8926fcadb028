//! # Shortly
//!
//! A small URL shortening service built with Axum, backed by an in-memory map
//! or Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and the storage trait
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and Redis stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory store, no expiry
//! cargo run
//!
//! # Redis store with a 1 hour TTL
//! export STORE_BACKEND=redis
//! export REDIS_URL="redis://localhost:6379/0"
//! export URL_TTL_SECONDS=3600
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::{StoreError, StoreResult, UrlStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::storage::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
