use axum::extract::State;
use axum::{routing::get, Json, Router};
use petcare_db::repositories::PetRepo;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of stored pets; absent when the database is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_count: Option<i64>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let pet_count = match petcare_db::health_check(&state.pool).await {
        Ok(()) => match PetRepo::count(&state.pool).await {
            Ok(count) => Some(count),
            Err(err) => {
                tracing::warn!(error = %err, "Health check could not count pets");
                None
            }
        },
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };
    let db_healthy = pet_count.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pet_count,
    })
}

/// Root-level health route, mounted outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
