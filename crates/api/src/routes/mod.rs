pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                  liveness
/// /movies                  list, create
/// /movies/{id}             get, update, delete
/// /stats                   catalog statistics
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(movies::router())
}
