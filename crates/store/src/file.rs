//! File-based MovieStore implementation.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use marquee_core::movie::Movie;

use crate::error::{Result, StoreError};
use crate::traits::MovieStore;

/// Suffix of the sibling file that receives an unreadable collection.
const CORRUPT_SUFFIX: &str = "corrupt";

/// Suffix of the temporary file written before the atomic rename.
const TEMP_SUFFIX: &str = "tmp";

/// JSON-file implementation of MovieStore.
///
/// # File Format
///
/// The whole collection is one pretty-printed UTF-8 JSON array:
///
/// ```text
/// data_dir/
/// ├── movies.json           current collection
/// ├── movies.json.tmp       only present mid-save
/// └── movies.json.corrupt   last unreadable collection, if any
/// ```
///
/// Writes go to the temp file first, are synced, then renamed over the
/// destination, so a crash never leaves a truncated `movies.json`.
pub struct JsonFileMovieStore {
    path: PathBuf,
    seed_path: Option<PathBuf>,
}

impl JsonFileMovieStore {
    /// Create a store backed by `data_dir/file_name`, creating `data_dir`
    /// if needed. The file itself is created on first load.
    pub fn new(data_dir: impl AsRef<Path>, file_name: &str) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(file_name),
            seed_path: None,
        })
    }

    /// Seed a missing backing file from `seed_path` (when that file exists).
    pub fn with_seed_file(mut self, seed_path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(seed_path.into());
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Initial contents for a missing backing file.
    fn seed(&self) -> Vec<Movie> {
        let Some(seed_path) = self.seed_path.as_deref() else {
            return Vec::new();
        };
        if !seed_path.exists() {
            tracing::debug!(seed = %seed_path.display(), "Seed file not found, starting empty");
            return Vec::new();
        }

        match fs::read(seed_path)
            .map_err(StoreError::Io)
            .and_then(|bytes| decode(&bytes))
        {
            Ok(movies) => {
                tracing::info!(
                    seed = %seed_path.display(),
                    count = movies.len(),
                    "Seeding movie collection"
                );
                movies
            }
            Err(e) => {
                tracing::warn!(seed = %seed_path.display(), error = %e, "Unreadable seed file, starting empty");
                Vec::new()
            }
        }
    }

    /// Copy an unreadable backing file aside so the next save cannot
    /// silently destroy it.
    fn quarantine(&self) {
        let backup = self.sibling(CORRUPT_SUFFIX);
        match fs::copy(&self.path, &backup) {
            Ok(_) => tracing::warn!(
                path = %self.path.display(),
                backup = %backup.display(),
                "Backed up unreadable movie collection"
            ),
            Err(e) => tracing::error!(
                path = %self.path.display(),
                error = %e,
                "Failed to back up unreadable movie collection"
            ),
        }
    }
}

impl MovieStore for JsonFileMovieStore {
    fn load(&self) -> Vec<Movie> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let movies = self.seed();
                if let Err(e) = self.save(&movies) {
                    tracing::error!(path = %self.path.display(), error = %e, "Failed to write seeded collection");
                }
                return movies;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read movie collection, treating as empty");
                self.quarantine();
                return Vec::new();
            }
        };

        // Invalid UTF-8 surfaces here too, so it is quarantined like bad JSON.
        match decode(&bytes) {
            Ok(movies) => {
                tracing::debug!(path = %self.path.display(), count = movies.len(), "Loaded movie collection");
                movies
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt movie collection, treating as empty");
                self.quarantine();
                Vec::new()
            }
        }
    }

    fn save(&self, movies: &[Movie]) -> Result<()> {
        let temp_path = self.sibling(TEMP_SUFFIX);

        let json =
            serde_json::to_string_pretty(movies).map_err(|e| StoreError::Json(e.to_string()))?;

        // Write and sync the temp file
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        drop(file);

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::Io(e));
        }
        sync_parent_dir(&self.path)?;

        tracing::debug!(path = %self.path.display(), count = movies.len(), "Saved movie collection");

        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if self.path.exists() {
            File::open(&self.path)?.sync_all()?;
            tracing::debug!(path = %self.path.display(), "Flushed movie collection");
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

fn decode(bytes: &[u8]) -> Result<Vec<Movie>> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Json(e.to_string()))
}

/// Make the rename itself durable.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        File::open(parent)?.sync_all()?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> Result<()> {
    Ok(())
}
