//! Shared pagination types for list endpoints.
//!
//! Handlers with additional filter fields embed `page`/`limit` directly in a
//! handler-specific query struct and reuse the defaults declared here;
//! `PaginationResponse<T>` is the consistent list response format.

use serde::{Deserialize, Serialize};

/// Default page for paginated list queries.
pub fn default_page() -> i64 {
    1
}

/// Default page size for paginated list queries.
pub fn default_limit() -> i64 {
    10
}

/// Standardized paginated response wrapper for list endpoints.
///
/// `total` counts every row matching the filter, independent of the page
/// window; `data` holds only the requested page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse<T> {
    /// Total number of items matching the query (across all pages)
    pub total: i64,
    /// The page this response covers (1-based)
    pub current_page: i64,
    /// The list of items for the current page
    pub data: Vec<T>,
}

impl<T> PaginationResponse<T> {
    /// Create a new paginated response.
    pub fn new(data: Vec<T>, total: i64, current_page: i64) -> Self {
        Self { total, current_page, data }
    }
}
