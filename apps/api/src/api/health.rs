use axum::{extract::State, http::StatusCode, Json};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

/// Readiness: ready when the database answers a ping.
pub async fn ready_handler(State(db): State<DatabaseConnection>) -> (StatusCode, Json<Value>) {
    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "ready": true,
                "services": { "database": "connected" }
            })),
        ),
        Err(e) => {
            tracing::error!("Readiness check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "ready": false,
                    "services": { "database": "disconnected" }
                })),
            )
        }
    }
}
