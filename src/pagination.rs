//! Page/limit parsing and the pagination summary returned with lead lists.

use serde::Serialize;

/// Page requested when the caller sends none or garbage.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the caller sends none or garbage.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Parses a positive integer query parameter, falling back to `default`
/// for missing, non-numeric or non-positive input.
pub fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value >= 1)
        .unwrap_or(default)
}

/// One-based page window over a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Builds a window, coercing zero values to the defaults.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            per_page: if per_page == 0 {
                DEFAULT_ITEMS_PER_PAGE
            } else {
                per_page
            },
        }
    }

    /// Builds a window from raw query-string values without ever failing.
    pub fn from_raw(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self {
            page: parse_positive(page, DEFAULT_PAGE),
            per_page: parse_positive(per_page, DEFAULT_ITEMS_PER_PAGE),
        }
    }

    /// Number of rows to skip.
    pub fn skip(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of rows to take.
    pub fn take(&self) -> usize {
        self.per_page
    }

    /// Summary for a result set containing `total` matching rows.
    pub fn summary(&self, total: usize) -> PageInfo {
        PageInfo {
            total,
            page: self.page,
            limit: self.per_page,
            pages: total.div_ceil(self.per_page),
        }
    }
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let pagination = Pagination::from_raw(Some("abc"), Some("ten"));
        assert_eq!(pagination, Pagination::new(1, 10));

        let pagination = Pagination::from_raw(Some("0"), Some("-5"));
        assert_eq!(pagination, Pagination::default());

        let pagination = Pagination::from_raw(None, None);
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn numeric_values_are_used() {
        let pagination = Pagination::from_raw(Some(" 3 "), Some("25"));
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.per_page, 25);
        assert_eq!(pagination.skip(), 50);
        assert_eq!(pagination.take(), 25);
    }

    #[test]
    fn first_page_skips_nothing() {
        assert_eq!(Pagination::default().skip(), 0);
    }

    #[test]
    fn summary_rounds_pages_up() {
        let info = Pagination::new(2, 10).summary(25);
        assert_eq!(
            info,
            PageInfo {
                total: 25,
                page: 2,
                limit: 10,
                pages: 3
            }
        );
        assert_eq!(Pagination::new(1, 10).summary(0).pages, 0);
        assert_eq!(Pagination::new(1, 10).summary(10).pages, 1);
    }
}
