use std::sync::Arc;

use marquee_core::movie::default_movies;
use marquee_store::{InMemoryMovieStore, JsonFileMovieStore, MovieCatalog, MovieStore};

use crate::config::{StorageBackend, StorageConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The one movie catalog for this process.
    pub catalog: Arc<MovieCatalog>,
}

/// Build the catalog for the configured storage backend.
///
/// The in-memory backend starts with the default movies; the file backend
/// seeds a missing file from the configured seed file.
pub fn build_catalog(storage: &StorageConfig) -> marquee_store::Result<MovieCatalog> {
    let store: Box<dyn MovieStore> = match storage.backend {
        StorageBackend::Memory => Box::new(InMemoryMovieStore::with_movies(default_movies())),
        StorageBackend::File => Box::new(
            JsonFileMovieStore::new(&storage.data_dir, &storage.data_file)?
                .with_seed_file(storage.resolved_seed_file()),
        ),
    };
    Ok(MovieCatalog::from_boxed(store))
}
