use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::WindowPolicy;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Service-window reading used by each call path.
    pub windows: WindowPolicy,
}

/// GET /health -- database reachability plus the active window policy, so
/// operators can see which opening-hours reading each path applies.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = waitline_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        windows: state.config.windows,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
