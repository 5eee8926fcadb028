//! Application layer services implementing business logic.
//!
//! Services consume the storage trait and give HTTP handlers and the admin CLI
//! a small API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
