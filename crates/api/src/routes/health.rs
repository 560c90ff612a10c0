//! Public liveness check that also pings the database pool.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::AppState;

/// Service status as seen by load balancers and uptime checks.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    /// `healthy` when the database answers, `degraded` otherwise.
    pub status: String,
    /// Whether the database answered a ping.
    pub database: bool,
    /// SpendWise version.
    pub version: String,
}

impl HealthStatus {
    fn from_ping(database: bool) -> (StatusCode, Self) {
        let (code, status) = if database {
            (StatusCode::OK, "healthy")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        };
        let body = Self {
            status: status.to_string(),
            database,
            version: env!("CARGO_PKG_VERSION").to_string(),
        };
        (code, body)
    }
}

/// GET /health - Liveness and database reachability.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = HealthStatus),
    )
)]
pub(crate) async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let database = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Database ping failed");
            false
        }
    };

    let (code, body) = HealthStatus::from_ping(database);
    (code, Json(body))
}

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
