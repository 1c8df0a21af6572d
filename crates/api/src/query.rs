//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for `GET /movies` (`?page=`).
///
/// `page` stays a raw string: malformed values are coerced to page 1 by the
/// paginator instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
