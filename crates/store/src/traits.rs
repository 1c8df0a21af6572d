//! Store contract for the movie collection.

use marquee_core::movie::Movie;

use crate::error::Result;

/// Custody of the full movie collection.
///
/// Every call works on the whole collection: `load` returns all records and
/// `save` replaces all records.
pub trait MovieStore: Send + Sync {
    /// Return the current collection.
    ///
    /// Never fails. Unreadable persisted state degrades to an empty
    /// collection.
    fn load(&self) -> Vec<Movie>;

    /// Replace the stored collection with `movies`.
    fn save(&self, movies: &[Movie]) -> Result<()>;

    /// Force persisted state to stable storage.
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Short description of the backend for startup logs.
    fn describe(&self) -> String;
}
