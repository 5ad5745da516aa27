//! Page requests and page arithmetic

use serde::Deserialize;

/// Page number used when none (or an invalid one) is requested
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none (or an invalid one) is requested
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: usize = 100;

/// Raw `page` / `page_size` query parameters
///
/// Values are kept as strings so that malformed input falls back to the
/// defaults instead of rejecting the request.
///
/// # Example
/// ```rust,ignore
/// pub async fn list_transactions(Query(query): Query<PageQuery>) -> impl IntoResponse {
///     let pagination = query.pagination();
///     // GET /transactions?page=2&page_size=25
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub page_size: Option<String>,
}

impl PageQuery {
    /// Normalized pagination for this query
    pub fn pagination(&self) -> Pagination {
        Pagination::new(parse_or_zero(&self.page), parse_or_zero(&self.page_size))
    }
}

fn parse_or_zero(raw: &Option<String>) -> i64 {
    raw.as_deref()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Pagination parameters and the totals derived from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: usize,

    /// Items per page
    pub page_size: usize,

    /// Items across all pages
    pub total_items: u64,

    /// Number of pages
    pub total_pages: usize,

    /// Whether a page exists after the current one
    pub has_more: bool,
}

impl Pagination {
    /// Create pagination with defaults applied
    ///
    /// Non-positive values fall back to the defaults and the page size is
    /// capped at [`MAX_PAGE_SIZE`].
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = usize::try_from(page)
            .ok()
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE);
        let page_size = usize::try_from(page_size)
            .ok()
            .filter(|s| *s > 0)
            .map_or(DEFAULT_PAGE_SIZE, |s| s.min(MAX_PAGE_SIZE));

        Self {
            page,
            page_size,
            total_items: 0,
            total_pages: 0,
            has_more: false,
        }
    }

    /// Record the total item count and derive page totals
    pub fn set_total(&mut self, total_items: u64) {
        self.total_items = total_items;
        self.total_pages = total_pages(total_items, self.page_size);
        self.has_more = self.page < self.total_pages;
    }

    /// Builder-style [`set_total`](Self::set_total)
    pub fn with_total(mut self, total_items: u64) -> Self {
        self.set_total(total_items);
        self
    }

    /// Number of items to skip for the current page
    ///
    /// Saturates at `usize::MAX` for page numbers past any real collection.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of items on a full page
    pub fn limit(&self) -> usize {
        self.page_size
    }

    /// Query parameters that reproduce this page in a link
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE as i64, DEFAULT_PAGE_SIZE as i64)
    }
}

/// Ceiling division of `total_items` by `page_size`; zero when `page_size` is zero
pub fn total_pages(total_items: u64, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_invalid_input() {
        let p = Pagination::new(0, -5);
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 10);
    }

    #[test]
    fn test_page_size_is_capped() {
        let p = Pagination::new(3, 500);
        assert_eq!(p.page, 3);
        assert_eq!(p.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_set_total_derives_pages() {
        let mut p = Pagination::new(2, 10);
        p.set_total(25);
        assert_eq!(p.total_items, 25);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_more);

        let last = Pagination::new(3, 10).with_total(25);
        assert!(!last.has_more);
    }

    #[test]
    fn test_offset_and_limit() {
        let p = Pagination::new(3, 20);
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn test_offset_saturates_for_huge_page() {
        let query = PageQuery {
            page: Some(i64::MAX.to_string()),
            page_size: Some("100".to_string()),
        };
        let p = query.pagination();

        assert_eq!(p.page, i64::MAX as usize);
        assert_eq!(p.offset(), usize::MAX);

        let items: Vec<u32> = (0..5).collect();
        assert_eq!(items.iter().skip(p.offset()).take(p.limit()).count(), 0);
    }

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(11, 0), 0);
    }

    #[test]
    fn test_page_query_falls_back_on_garbage() {
        let query = PageQuery {
            page: Some("two".to_string()),
            page_size: Some(" 25 ".to_string()),
        };
        let p = query.pagination();
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 25);

        assert_eq!(PageQuery::default().pagination(), Pagination::default());
    }

    #[test]
    fn test_query_params() {
        let p = Pagination::new(2, 10);
        assert_eq!(
            p.query_params(),
            [("page", "2".to_string()), ("page_size", "10".to_string())]
        );
    }
}
