//! Liveness endpoint for load balancers and the ordering client.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when Postgres answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Always answers 200 so the process stays in rotation while Postgres is
/// briefly unreachable; the body tells the two states apart.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match flowerdesk_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// `/health`, merged at the root beside the `/api` tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
