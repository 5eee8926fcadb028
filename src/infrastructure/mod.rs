//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`storage`] - In-memory and Redis implementations of
//!   [`crate::domain::repositories::UrlStore`]

pub mod storage;
