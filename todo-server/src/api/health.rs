//! Health Check API Handler

use axum::{Json, http::StatusCode, response::IntoResponse};

/// GET /health
/// Liveness probe; does not touch storage
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
