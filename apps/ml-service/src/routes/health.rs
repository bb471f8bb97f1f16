use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "CareerSync AI ML Service";

/// GET /
/// Service banner, as polled by the application backend.
pub async fn service_info_handler() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": SERVICE_NAME
    }))
}
