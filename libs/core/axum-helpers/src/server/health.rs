use axum::{extract::State, routing::get, Json, Router};
use core_config::AppInfo;
use serde::Serialize;

/// Liveness response with application identity.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Router exposing `/health` (liveness).
///
/// Readiness (`/ready`) belongs to the app, which knows its own
/// dependencies and can check them for real.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}

async fn health_handler(State(app_info): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: app_info.name,
        version: app_info.version,
    })
}
