//! Health check route handler.

use axum::Json;
use serde::Serialize;

/// Confirmation message returned by `GET /`.
pub const HEALTH_MESSAGE: &str = "API Speed Analyser is running ✓";

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE,
    })
}
