//! Handler for the `/stats` resource.

use axum::extract::State;
use axum::Json;
use marquee_core::stats::MovieStats;

use super::with_catalog;
use crate::error::AppResult;
use crate::state::AppState;

/// GET /stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<MovieStats>> {
    let stats = with_catalog(&state, |catalog| catalog.stats()).await?;
    Ok(Json(stats))
}
