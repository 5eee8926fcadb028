//! Public base URL resolution from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the base URL that short links are served under.
///
/// Uses `configured` verbatim when set (trailing `/` trimmed). Otherwise the
/// base is `<scheme>://<host>`, where the host comes from the `Host` header or,
/// for HTTP/2 requests, the URI authority. The scheme comes from
/// `X-Forwarded-Proto` (first value, `http` or `https`) and defaults to `http`.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if no base is configured and neither a
/// valid `Host` header nor a URI authority is present.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let base = request_base_url(&headers, &Uri::from_static("/shorten"), None).unwrap();
/// assert_eq!(base, "http://sho.rt:8080");
/// ```
pub fn request_base_url(
    headers: &HeaderMap,
    uri: &Uri,
    configured: Option<&str>,
) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header"))?,
        None => uri
            .authority()
            .map(|a| a.as_str())
            .ok_or_else(|| AppError::bad_request("Missing Host header"))?,
    };

    Ok(format!("{}://{}", request_scheme(headers), host))
}

/// Scheme the client used, as reported by a reverse proxy.
fn request_scheme(headers: &HeaderMap) -> &'static str {
    let proto = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);

    match proto {
        Some(p) if p.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    }
}
