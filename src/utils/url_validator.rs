//! Syntactic validation of URLs submitted for shortening.
//!
//! Only the shape of the URL is checked. Reachability is never tested and the
//! URL is stored exactly as submitted.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("long_url is required")]
    Missing,

    #[error("Invalid URL format")]
    InvalidFormat,
}

/// Checks that `input` is a non-empty absolute HTTP or HTTPS URL with a host.
///
/// This is deliberately narrower than "any syntactically valid absolute URL":
/// well-formed URLs with other schemes, such as `ftp://example.com/file`, are
/// rejected too.
///
/// # Security
///
/// Rejects schemes such as `javascript:`, `data:`, or `file:`, which would
/// otherwise be served as redirect targets.
///
/// # Errors
///
/// Returns [`UrlValidationError::Missing`] for an empty string and
/// [`UrlValidationError::InvalidFormat`] for anything that is not an absolute
/// http(s) URL.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://example.com/path?q=1").is_ok());
/// assert_eq!(validate_long_url(""), Err(UrlValidationError::Missing));
/// assert_eq!(validate_long_url("not-a-url"), Err(UrlValidationError::InvalidFormat));
/// ```
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    let url = Url::parse(input).map_err(|_| UrlValidationError::InvalidFormat)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::InvalidFormat),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat);
    }

    Ok(())
}
