//! DTO for the service information endpoint.

use serde::Serialize;

/// Describes the service and its endpoints.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: &'static str,
}
