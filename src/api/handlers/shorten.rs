//! Handler for link shortening endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::request_base_url;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/aZ3kP9qX",
///   "long_url": "https://example.com",
///   "short_code": "aZ3kP9qX"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, `long_url` is
/// missing, null or empty, or `long_url` is not an absolute http(s) URL.
/// The body is decoded as JSON whatever its `Content-Type`.
/// Returns 500 Internal Server Error if the mapping could not be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body?)?;
    payload.validate()?;

    let base_url = request_base_url(&headers, &uri, state.public_base_url.as_deref())?;

    let code = state.link_service.shorten(&payload.long_url).await?;
    let short_url = state.link_service.short_url(&base_url, &code);

    Ok(Json(ShortenResponse {
        short_url,
        long_url: payload.long_url,
        short_code: code,
    }))
}
