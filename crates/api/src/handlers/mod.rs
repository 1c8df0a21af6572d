pub mod movies;
pub mod stats;

use std::sync::Arc;

use marquee_store::MovieCatalog;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Run `op` against the catalog on the blocking thread pool.
///
/// Every catalog call may hit the filesystem (read, fsync, rename) while
/// holding the catalog mutex, so it must not run on an async worker.
pub(crate) async fn with_catalog<T, F>(state: &AppState, op: F) -> AppResult<T>
where
    F: FnOnce(&MovieCatalog) -> T + Send + 'static,
    T: Send + 'static,
{
    let catalog = Arc::clone(&state.catalog);
    tokio::task::spawn_blocking(move || op(&catalog))
        .await
        .map_err(|e| AppError::InternalError(format!("Catalog task failed: {e}")))
}
