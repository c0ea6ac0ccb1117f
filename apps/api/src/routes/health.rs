use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness banner for anyone poking the service root.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Drawsy LLM Service is running!"
    }))
}

/// GET /health
/// Detailed status object with service name and version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "All systems operational",
        "service": "drawsy-llm",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
