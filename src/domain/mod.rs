//! Domain layer containing the data model and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependency on HTTP or on any concrete backend.
//! Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
