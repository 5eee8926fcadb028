//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::application::services::link_service::NOT_FOUND_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code_path;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`, where `code` matches `[A-Za-z0-9_-]+`
///
/// # Response
///
/// 301 Moved Permanently with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns 404 Not Found if the code does not match the pattern, is unknown,
/// has expired, or the store could not be read.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code_path(&code) {
        debug!("Rejected malformed short code {:?}", code);
        return Err(AppError::not_found(NOT_FOUND_MESSAGE));
    }

    let long_url = state.link_service.resolve(&code).await?;
    let location = location_header(&long_url)?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Encodes a stored URL as a `Location` header value.
///
/// URLs are stored as submitted; those with non-ASCII characters fall back to
/// their percent-encoded serialization.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(long_url) {
        return Ok(value);
    }

    Url::parse(long_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::internal(format!("Stored URL is not a valid Location: {long_url}")))
}
