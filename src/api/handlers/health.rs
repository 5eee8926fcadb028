//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    HealthChecks, HealthResponse, ServiceStatus, StoreCheck, StoreStatus,
};
use crate::state::AppState;

/// Reports whether the configured store is reachable.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "store": { "status": "ok", "message": "redis reachable" } }
/// }
/// ```
///
/// # Errors
///
/// Returns 503 Service Unavailable with `"status": "degraded"` when the store
/// does not answer its health check.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = state.link_service.store();
    let store_check = StoreCheck::from_probe(store.backend_name(), store.health_check().await);
    let healthy = store_check.status == StoreStatus::Ok;

    let response = HealthResponse {
        status: if healthy {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
