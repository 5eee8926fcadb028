//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation and path validation
//! - [`url_validator`] - Syntactic checks on submitted URLs
//! - [`base_url`] - Public base URL resolution from HTTP headers

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
