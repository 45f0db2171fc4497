//! Shared query parameter types for API handlers.

use serde::Deserialize;

use quorum_search::{SortField, SortOrder};

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Used by any handler that supports paginated listing. Values are
/// clamped in the repository layer.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, 100)
    }

    pub fn offset_or_zero(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Query parameters for the search endpoints
/// (`?q=&page=&sort=&order=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The search query. Empty matches everything.
    #[serde(default)]
    pub q: String,
    /// 1-based page number.
    pub page: Option<i64>,
    /// Optional sortable field; relevance order when absent.
    pub sort: Option<SortField>,
    /// Sort direction (default: descending).
    pub order: Option<SortOrder>,
}
