use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use utoipa::ToSchema;

use crate::application::ports::{NeoStore, StoreError};
use crate::api::errors::sanitize_db_error;

/// Basic health check response
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Database readiness response
#[derive(serde::Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health
/// Basic health check endpoint (no database check)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "neo_analytics",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// GET /health/ready
/// Readiness probe with database connectivity check
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(store): State<Arc<dyn NeoStore>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let start_time = Instant::now();

    let db_check = tokio::time::timeout(Duration::from_secs(2), store.ping()).await;
    let response_time = start_time.elapsed();

    match db_check {
        Ok(Ok(())) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "service": "neo_analytics",
                "database": "connected",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": response_time.as_millis(),
            })),
        ),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check failed");
            let error = match &e {
                StoreError::Database(db) => sanitize_db_error(db),
                StoreError::Decode(_) => "Database decode error",
            };
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "service": "neo_analytics",
                    "database": "disconnected",
                    "error": error,
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                    "response_time_ms": response_time.as_millis(),
                })),
            )
        }
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "service": "neo_analytics",
                "database": "timeout",
                "error": "Database query timed out after 2 seconds",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": response_time.as_millis(),
            })),
        ),
    }
}
