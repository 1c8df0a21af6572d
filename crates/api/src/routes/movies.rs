//! Route definitions for movies and catalog statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::{movies, stats};
use crate::state::AppState;

/// Movie CRUD and stats routes.
///
/// ```text
/// GET    /movies          -> list (?page=N)
/// POST   /movies          -> create
/// GET    /movies/{id}     -> get_by_id
/// PUT    /movies/{id}     -> update
/// DELETE /movies/{id}     -> delete
/// GET    /stats           -> get_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route(
            "/movies/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
        .route("/stats", get(stats::get_stats))
}
