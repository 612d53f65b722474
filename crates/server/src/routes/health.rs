use axum::{Json, Router, routing::get};

/// Liveness endpoint for monitoring.
pub struct HealthRoutes;

impl HealthRoutes {
    pub fn routes() -> Router {
        async fn health() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        }

        Router::new().route("/health", get(health))
    }
}
