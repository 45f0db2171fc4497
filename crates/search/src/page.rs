//! Fixed-size result pages.

use serde::Serialize;

/// Hits per page on every search endpoint.
pub const PAGE_SIZE: i64 = 10;

/// One page of search hits plus navigation fields. `next_page` wraps to
/// 1 from the last page so a client can cycle without bounds checks.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage<T> {
    pub results: Vec<T>,
    pub total_hits: i64,
    pub page: i64,
    pub total_pages: i64,
    pub next_page: i64,
}

impl<T> SearchPage<T> {
    /// Assemble a page from raw hits. `page` is 1-based; an empty result
    /// set still reports one (empty) page.
    pub fn new(results: Vec<T>, total_hits: i64, page: i64) -> Self {
        let total_pages = ((total_hits + PAGE_SIZE - 1) / PAGE_SIZE).max(1);
        let page = page.clamp(1, total_pages);
        let next_page = if page >= total_pages { 1 } else { page + 1 };
        Self {
            results,
            total_hits,
            page,
            total_pages,
            next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_page() {
        let page = SearchPage::new(vec![1, 2, 3], 3, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.next_page, 1);
    }

    #[test]
    fn test_exact_multiple() {
        let page = SearchPage::new(vec![0; 10], 20, 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.next_page, 2);
    }

    #[test]
    fn test_next_page_wraps_from_last() {
        let page = SearchPage::new(vec![0; 5], 25, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.next_page, 1);
    }

    #[test]
    fn test_empty_results_still_one_page() {
        let page: SearchPage<i32> = SearchPage::new(vec![], 0, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.next_page, 1);
    }

    #[test]
    fn test_page_clamped_into_range() {
        let page = SearchPage::new(vec![0; 10], 12, 99);
        assert_eq!(page.page, 2);
        assert_eq!(page.next_page, 1);
    }
}
