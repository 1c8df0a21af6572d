//! Fixed-size, 1-indexed pagination over the full collection.

use serde::Serialize;

use crate::movie::Movie;

/// Number of records per page.
pub const PAGE_SIZE: usize = 10;

/// One page of movies plus the numbers a client needs to render paging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub movies: Vec<Movie>,
    /// The page actually served, after coercion and clamping.
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice `movies` into the requested page.
///
/// The requested page comes straight from the query string. Missing or
/// unparsable values become 1, values below 1 are raised to 1 and values
/// past the last page are lowered to the last page, so the served page is
/// always within `1..=total_pages`.
pub fn paginate(movies: &[Movie], requested: Option<&str>, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total = movies.len();
    let total_pages = total.div_ceil(page_size).max(1);

    let page = parse_page(requested).clamp(1, total_pages as i64) as usize;

    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        movies: movies[start..end].to_vec(),
        page,
        page_size,
        total,
        total_pages,
    }
}

fn parse_page(requested: Option<&str>) -> i64 {
    requested
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(n: usize) -> Vec<Movie> {
        (1..=n as i64)
            .map(|id| Movie {
                id,
                title: format!("Movie {id}"),
                director: Some("Someone".into()),
                year: 2000,
                rating: 5.0,
            })
            .collect()
    }

    fn ids(page: &Page) -> Vec<i64> {
        page.movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn first_page_holds_first_ten() {
        let all = movies(25);
        let page = paginate(&all, Some("1"), PAGE_SIZE);
        assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn last_page_is_truncated() {
        let all = movies(25);
        let page = paginate(&all, Some("3"), PAGE_SIZE);
        assert_eq!(ids(&page), vec![21, 22, 23, 24, 25]);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn page_past_the_end_clamps_to_last() {
        let all = movies(25);
        let page = paginate(&all, Some("4"), PAGE_SIZE);
        assert_eq!(page.page, 3);
        assert_eq!(page.movies.len(), 5);
    }

    #[test]
    fn malformed_page_becomes_one() {
        let all = movies(25);
        for raw in [None, Some("abc"), Some(""), Some("2.5")] {
            let page = paginate(&all, raw, PAGE_SIZE);
            assert_eq!(page.page, 1, "requested {raw:?}");
        }
    }

    #[test]
    fn zero_and_negative_pages_clamp_to_one() {
        let all = movies(25);
        assert_eq!(paginate(&all, Some("0"), PAGE_SIZE).page, 1);
        assert_eq!(paginate(&all, Some("-7"), PAGE_SIZE).page, 1);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let page = paginate(&[], Some("5"), PAGE_SIZE);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.movies.is_empty());
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let all = movies(20);
        assert_eq!(paginate(&all, None, PAGE_SIZE).total_pages, 2);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(paginate(&movies(1), None, PAGE_SIZE)).unwrap();
        assert_eq!(value["pageSize"], 10);
        assert_eq!(value["totalPages"], 1);
        assert!(value["movies"].is_array());
    }
}
