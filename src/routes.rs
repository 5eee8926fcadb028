//! Top-level router configuration.
//!
//! # Route Structure
//!
//! See [`crate::api::routes::routes`].
//!
//! # Middleware
//!
//! From outermost to innermost:
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin mirroring, credentials, preflight answers
//! - **OPTIONS** - 200 with an empty body for non-preflight `OPTIONS`

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware except path normalization.
pub fn build_router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(middleware::from_fn(cors::options_ok))
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Wraps [`build_router`] so that `/shorten/` and `/shorten` are equivalent.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
