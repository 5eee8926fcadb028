//! API route configuration.

use crate::api::handlers::{health_handler, info_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `GET  /`          - Service information
/// - `GET  /health`    - Store health check
/// - `POST /shorten`   - Create a short URL
/// - `GET  /{code}`    - Redirect to the original URL
///
/// Static segments take priority over `/{code}`, so `health` and `shorten`
/// never resolve as short codes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
}
