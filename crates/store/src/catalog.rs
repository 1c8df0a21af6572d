//! The movie catalog service.
//!
//! Wraps a [`MovieStore`] and runs each operation as a single
//! load -> validate -> mutate -> save cycle. All cycles share one mutex so
//! concurrent writers cannot lose each other's updates or hand out the same
//! id twice.

use std::sync::{Mutex, MutexGuard};

use marquee_core::error::CoreError;
use marquee_core::movie::{next_id, Movie, MovieInput};
use marquee_core::pagination::{paginate, Page, PAGE_SIZE};
use marquee_core::stats::{compute_stats, MovieStats};
use marquee_core::types::MovieId;
use marquee_core::validation::validate_movie;

use crate::error::StoreError;
use crate::traits::MovieStore;

/// Entity name used in not-found errors.
const ENTITY: &str = "Movie";

/// Errors from a catalog operation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Validation or not-found.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The collection could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Owned, process-wide movie catalog.
pub struct MovieCatalog {
    store: Box<dyn MovieStore>,
    cycle: Mutex<()>,
}

impl MovieCatalog {
    pub fn new(store: impl MovieStore + 'static) -> Self {
        Self::from_boxed(Box::new(store))
    }

    /// Build from a backend chosen at runtime.
    pub fn from_boxed(store: Box<dyn MovieStore>) -> Self {
        Self {
            store,
            cycle: Mutex::new(()),
        }
    }

    /// Backend description, for logs.
    pub fn describe(&self) -> String {
        self.store.describe()
    }

    /// One page of movies. `page` is the raw query-string value.
    pub fn list_page(&self, page: Option<&str>) -> Page {
        let _guard = self.lock();
        paginate(&self.store.load(), page, PAGE_SIZE)
    }

    /// A single movie by id.
    pub fn get(&self, id: MovieId) -> CatalogResult<Movie> {
        let _guard = self.lock();
        self.store
            .load()
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Validate `input` and append it with the next free id.
    pub fn create(&self, input: &MovieInput) -> CatalogResult<Movie> {
        let new = validate_movie(input).map_err(CoreError::Validation)?;

        let _guard = self.lock();
        let mut movies = self.store.load();
        let movie = Movie::from_new(next_id(&movies), new);
        movies.push(movie.clone());
        self.store.save(&movies)?;

        tracing::info!(id = movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Validate `input` and overwrite every field of movie `id` with it.
    ///
    /// The record keeps its id and its position in the collection.
    pub fn update(&self, id: MovieId, input: &MovieInput) -> CatalogResult<Movie> {
        let new = validate_movie(input).map_err(CoreError::Validation)?;

        let _guard = self.lock();
        let mut movies = self.store.load();
        let movie = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found(id))?;
        movie.apply(new);
        let updated = movie.clone();
        self.store.save(&movies)?;

        tracing::info!(id, "Movie updated");
        Ok(updated)
    }

    /// Remove movie `id`, keeping the others in their original order.
    pub fn delete(&self, id: MovieId) -> CatalogResult<()> {
        let _guard = self.lock();
        let mut movies = self.store.load();
        let index = movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| not_found(id))?;
        movies.remove(index);
        self.store.save(&movies)?;

        tracing::info!(id, "Movie deleted");
        Ok(())
    }

    /// Statistics over the whole collection.
    pub fn stats(&self) -> MovieStats {
        let _guard = self.lock();
        compute_stats(&self.store.load())
    }

    /// Flush the store; called once at shutdown.
    pub fn flush(&self) -> CatalogResult<()> {
        let _guard = self.lock();
        self.store.flush()?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        self.cycle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn not_found(id: MovieId) -> CatalogError {
    CatalogError::Core(CoreError::NotFound { entity: ENTITY, id })
}
