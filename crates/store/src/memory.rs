//! In-memory MovieStore implementation for tests and ephemeral deployments.

use std::sync::RwLock;

use marquee_core::movie::Movie;

use crate::error::{Result, StoreError};
use crate::traits::MovieStore;

/// In-memory implementation of MovieStore.
///
/// Contents are lost when the process exits.
pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_movies(Vec::new())
    }

    /// Create a store holding `movies`.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore for InMemoryMovieStore {
    fn load(&self) -> Vec<Movie> {
        match self.movies.read() {
            Ok(movies) => movies.clone(),
            Err(poisoned) => {
                tracing::warn!("In-memory movie store lock poisoned, reading last state");
                poisoned.into_inner().clone()
            }
        }
    }

    fn save(&self, movies: &[Movie]) -> Result<()> {
        let mut held = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        *held = movies.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::movie::default_movies;

    #[test]
    fn new_store_is_empty() {
        assert!(InMemoryMovieStore::new().load().is_empty());
    }

    #[test]
    fn save_replaces_contents() {
        let store = InMemoryMovieStore::with_movies(default_movies());
        let kept = default_movies()[..2].to_vec();

        store.save(&kept).unwrap();

        assert_eq!(store.load(), kept);
    }

    #[test]
    fn load_returns_a_snapshot() {
        let store = InMemoryMovieStore::with_movies(default_movies());
        let mut snapshot = store.load();
        snapshot.clear();

        assert_eq!(store.load().len(), 5);
    }
}
