use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /health -- liveness only; the store is not touched.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
