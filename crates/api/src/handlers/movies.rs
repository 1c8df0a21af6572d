//! Handlers for the `/movies` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::movie::{Movie, MovieInput};
use marquee_core::pagination::Page;
use marquee_core::types::MovieId;

use super::with_catalog;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /movies?page=N
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page>> {
    let page = with_catalog(&state, move |catalog| catalog.list_page(params.page.as_deref())).await?;
    Ok(Json(page))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<MovieId>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let id = movie_id(path)?;
    let movie = with_catalog(&state, move |catalog| catalog.get(id)).await??;
    Ok(Json(movie))
}

/// POST /movies
///
/// Any `id` in the body is ignored; the catalog assigns one.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let input = body(payload)?;
    let movie = with_catalog(&state, move |catalog| catalog.create(&input)).await??;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /movies/{id}
///
/// Replaces every field except `id`; partial updates are not supported.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<MovieId>, PathRejection>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let id = movie_id(path)?;
    let input = body(payload)?;
    let movie = with_catalog(&state, move |catalog| catalog.update(id, &input)).await??;
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<MovieId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = movie_id(path)?;
    with_catalog(&state, move |catalog| catalog.delete(id)).await??;
    Ok(StatusCode::NO_CONTENT)
}

/// An id segment that is not an integer names no movie.
fn movie_id(path: Result<Path<MovieId>, PathRejection>) -> AppResult<MovieId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::UnknownId(rejection.body_text()))
}

/// Unwrap a JSON body, turning extractor failures into a 400.
fn body(payload: Result<Json<MovieInput>, JsonRejection>) -> AppResult<MovieInput> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
