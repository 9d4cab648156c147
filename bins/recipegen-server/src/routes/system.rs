//! Liveness and metrics

use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSecs": recipegen_telemetry::metrics().uptime_secs(),
    }))
}

pub async fn metrics() -> Json<Value> {
    Json(recipegen_telemetry::metrics().export_json())
}
