//! Core domain entities.
//!
//! - [`Link`] - A short code to URL mapping

pub mod link;

pub use link::Link;
