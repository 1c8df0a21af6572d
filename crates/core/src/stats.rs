//! Summary statistics over the full collection.
//!
//! Recomputed from scratch on every call; nothing is cached.

use std::collections::HashMap;

use serde::Serialize;

use crate::movie::Movie;
use crate::validation::round_to;

/// Aggregate numbers for the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieStats {
    pub total: usize,
    /// Mean rating rounded to two decimals; `0` for an empty catalog.
    pub average_rating: f64,
    /// Most frequent director, `null` when no record names one.
    pub top_director: Option<String>,
    pub top_director_count: usize,
}

/// Compute the catalog statistics.
///
/// Ties for top director go to whichever director reached the winning count
/// first in insertion order: the leader is only replaced by a strictly
/// greater count.
pub fn compute_stats(movies: &[Movie]) -> MovieStats {
    let total = movies.len();

    let average_rating = if total == 0 {
        0.0
    } else {
        let sum: f64 = movies.iter().map(|m| m.rating).sum();
        round_to(sum / total as f64, 2)
    };

    let (top_director, top_director_count) = top_director(movies)
        .map(|(name, count)| (Some(name.to_string()), count))
        .unwrap_or((None, 0));

    MovieStats {
        total,
        average_rating,
        top_director,
        top_director_count,
    }
}

fn top_director(movies: &[Movie]) -> Option<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut leader: Option<(&str, usize)> = None;

    for director in movies.iter().filter_map(|m| m.director.as_deref()) {
        if director.is_empty() {
            continue;
        }
        let count = counts.entry(director).or_insert(0);
        *count += 1;

        match leader {
            Some((_, best)) if *count <= best => {}
            _ => leader = Some((director, *count)),
        }
    }

    leader
}
