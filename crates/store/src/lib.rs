//! Storage for the movie collection.
//!
//! A [`MovieStore`] holds the full collection either in memory or in a
//! single JSON file. [`MovieCatalog`] runs every request against a store as
//! one serialized load-mutate-save cycle.

pub mod catalog;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use catalog::{CatalogError, MovieCatalog};
pub use error::{Result, StoreError};
pub use file::JsonFileMovieStore;
pub use memory::InMemoryMovieStore;
pub use traits::MovieStore;
