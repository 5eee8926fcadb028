//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service state reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Result of probing the store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreCheck,
}

/// Reachability of the configured backend, e.g. `"redis unreachable"`.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: StoreStatus,
    pub message: String,
}

impl StoreCheck {
    pub fn from_probe(backend: &str, reachable: bool) -> Self {
        if reachable {
            Self {
                status: StoreStatus::Ok,
                message: format!("{} reachable", backend),
            }
        } else {
            Self {
                status: StoreStatus::Error,
                message: format!("{} unreachable", backend),
            }
        }
    }
}
