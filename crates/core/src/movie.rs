//! Movie record model and DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::MovieId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of `title` and `director`, in characters.
pub const MAX_TEXT_LEN: usize = 120;

/// Earliest accepted release year.
pub const MIN_YEAR: i64 = 1888;

/// Latest accepted release year.
pub const MAX_YEAR: i64 = 2100;

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A stored movie record.
///
/// `director` is optional only so that collections written before the field
/// existed still load. Every record accepted through the validator has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    pub year: i64,
    pub rating: f64,
}

impl Movie {
    /// Build a stored record from validated fields and an assigned id.
    pub fn from_new(id: MovieId, new: NewMovie) -> Self {
        Self {
            id,
            title: new.title,
            director: Some(new.director),
            year: new.year,
            rating: new.rating,
        }
    }

    /// Overwrite every field except `id` with the validated values.
    pub fn apply(&mut self, new: NewMovie) {
        self.title = new.title;
        self.director = Some(new.director);
        self.year = new.year;
        self.rating = new.rating;
    }
}

/// A validated, normalized movie that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub year: i64,
    pub rating: f64,
}

/// Raw request body for create and update.
///
/// Fields are left untyped so the validator can coerce numeric strings and
/// report every bad field at once instead of failing on the first type
/// mismatch during deserialization. Unknown keys (including `id`) are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieInput {
    pub title: Option<Value>,
    pub director: Option<Value>,
    pub year: Option<Value>,
    pub rating: Option<Value>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Next id for a collection: one past the current maximum, or 1 when empty.
pub fn next_id(movies: &[Movie]) -> MovieId {
    movies.iter().map(|m| m.id).max().unwrap_or(0) + 1
}

/// The catalog a fresh in-memory service starts with.
pub fn default_movies() -> Vec<Movie> {
    let seed: [(&str, &str, i64, f64); 5] = [
        ("The Shawshank Redemption", "Frank Darabont", 1994, 9.3),
        ("The Godfather", "Francis Ford Coppola", 1972, 9.2),
        ("The Dark Knight", "Christopher Nolan", 2008, 9.0),
        ("Pulp Fiction", "Quentin Tarantino", 1994, 8.9),
        ("Forrest Gump", "Robert Zemeckis", 1994, 8.8),
    ];

    seed.into_iter()
        .zip(1..)
        .map(|((title, director, year, rating), id)| Movie {
            id,
            title: title.to_string(),
            director: Some(director.to_string()),
            year,
            rating,
        })
        .collect()
}
