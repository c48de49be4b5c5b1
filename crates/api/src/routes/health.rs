//! Liveness endpoint for the catalog service, mounted at `/health` outside
//! the versioned API.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the catalog database answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always answers 200; a failed `SELECT 1` only flips `db_healthy` and the
/// status, so load balancers can tell a live process from a usable one.
async fn catalog_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match catalog_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}
