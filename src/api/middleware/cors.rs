//! Cross-origin resource sharing for browser clients.

use axum::{
    extract::Request,
    http::{HeaderName, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Request headers browsers may send cross-origin.
const ALLOWED_HEADERS: [HeaderName; 7] = [
    header::ORIGIN,
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::ACCEPT_ENCODING,
    HeaderName::from_static("x-csrf-token"),
    header::AUTHORIZATION,
    HeaderName::from_static("x-requested-with"),
];

/// Methods advertised to browsers.
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Creates the CORS layer.
///
/// Every origin is allowed with credentials. The request `Origin` is echoed
/// back because browsers refuse `Access-Control-Allow-Origin: *` on
/// credentialed requests. Preflight requests are answered by the layer itself
/// with 200 and an empty body.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
        .allow_credentials(true)
}

/// Answers any `OPTIONS` request that is not a CORS preflight with 200 and an
/// empty body, regardless of the methods the route supports.
///
/// Must sit inside [`layer`] so the CORS headers are still attached.
pub async fn options_ok(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}
