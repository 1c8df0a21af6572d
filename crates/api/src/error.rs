use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use marquee_store::{CatalogError, StoreError};
use serde_json::json;

/// Body message for a missing movie.
pub const NOT_FOUND_MESSAGE: &str = "Movie not found.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The collection could not be persisted.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A path id that does not parse as a movie id.
    #[error("Unknown id: {0}")]
    UnknownId(String),

    /// A failure outside the domain, such as a crashed catalog task.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Core(e) => AppError::Core(e),
            CatalogError::Store(e) => AppError::Store(e),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // --- Client errors with their own body shapes ---
            AppError::Core(CoreError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, axum::Json(json!({ "errors": errors })))
                    .into_response()
            }
            AppError::Core(CoreError::NotFound { .. }) => not_found(),
            AppError::UnknownId(reason) => {
                tracing::debug!(%reason, "Rejected non-numeric movie id");
                not_found()
            }

            AppError::BadRequest(msg) => coded(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),

            // --- Server errors: log details, return a sanitized body ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Failed to persist movie collection");
                internal()
            }
        }
    }
}

fn coded(status: StatusCode, code: &str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({ "message": NOT_FOUND_MESSAGE })),
    )
        .into_response()
}

fn internal() -> Response {
    coded(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
