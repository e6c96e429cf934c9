//! Paging parameters for list endpoints

use serde::Serialize;

/// Page used when none (or an invalid one) is requested
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when none (or an invalid one) is requested
pub const DEFAULT_SIZE: i64 = 10;

/// Upper bound on page size
pub const MAX_SIZE: i64 = 100;

/// Normalized, 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Build a page request, falling back to defaults for missing or
    /// non-positive values and capping the size.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let size = size
            .filter(|s| *s >= 1)
            .map_or(DEFAULT_SIZE, |s| s.min(MAX_SIZE));
        Self { page, size }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of rows to skip
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }

    /// Number of pages needed for `total` items
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.size - 1) / self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}
