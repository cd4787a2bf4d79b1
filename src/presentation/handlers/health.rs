use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use super::api_types::HealthResponse;

pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }),
    )
}

pub async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "transcribe": "POST /api/v1/transcribe",
            "transcribe_status": "GET /api/v1/transcribe/status",
            "summarize": "POST /api/v1/summarize",
            "summarize_batch": "POST /api/v1/summarize/batch",
            "summarize_status": "GET /api/v1/summarize/status",
            "health": "GET /health",
        },
    }))
}
