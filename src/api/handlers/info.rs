//! Handler for the service information endpoint.

use axum::Json;

use crate::api::dto::info::InfoResponse;

/// Describes the service and its endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "URL Shortener API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: "POST /shorten - Create short URL, GET /{shortCode} - Redirect to long URL",
    })
}
