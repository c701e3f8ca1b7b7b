//! Offset page windows over the newest-first post listing.

use super::error::DomainError;

/// Rows per page when the caller does not ask for a specific size.
pub const DEFAULT_PAGE_LIMIT: i64 = 12;

/// The `(skip, limit)` slice addressed by a page number and page size.
///
/// `start` is the number of rows skipped and `end` the exclusive upper bound
/// of the window. Both are computed up front so a window is never built with
/// negative or overflowing indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_number: i64,
    limit: i64,
    start: i64,
    end: i64,
}

impl PageWindow {
    pub fn new(page_number: i64, limit: i64) -> Result<Self, DomainError> {
        if page_number < 0 {
            return Err(DomainError::validation(format!(
                "page number must not be negative (got {page_number})"
            )));
        }
        if limit <= 0 {
            return Err(DomainError::validation(format!(
                "limit must be greater than zero (got {limit})"
            )));
        }

        let start = page_number
            .checked_mul(limit)
            .ok_or_else(|| DomainError::validation("page window start overflows"))?;
        let end = page_number
            .checked_add(1)
            .and_then(|next| next.checked_mul(limit))
            .ok_or_else(|| DomainError::validation("page window end overflows"))?;

        Ok(Self {
            page_number,
            limit,
            start,
            end,
        })
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Whether rows precede this window.
    pub fn has_previous(&self) -> bool {
        self.start > 0
    }

    /// Whether rows follow this window given the current total.
    pub fn has_next(&self, total: u64) -> bool {
        // `end` is positive here, so the widening is lossless.
        (self.end as u64) < total
    }

    pub fn previous(&self) -> Option<PageWindow> {
        self.has_previous()
            .then(|| PageWindow::new(self.page_number - 1, self.limit).ok())
            .flatten()
    }

    pub fn next(&self, total: u64) -> Option<PageWindow> {
        self.has_next(total)
            .then(|| PageWindow::new(self.page_number + 1, self.limit).ok())
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let window = PageWindow::new(0, 12).expect("valid window");
        assert_eq!(window.start(), 0);
        assert_eq!(window.end(), 12);
        assert!(!window.has_previous());
        assert!(window.previous().is_none());
    }

    #[test]
    fn later_pages_link_backwards() {
        let window = PageWindow::new(3, 5).expect("valid window");
        assert_eq!(window.start(), 15);
        assert_eq!(window.end(), 20);

        let previous = window.previous().expect("previous page");
        assert_eq!(previous.page_number(), 2);
        assert_eq!(previous.limit(), 5);
    }

    #[test]
    fn next_requires_rows_past_the_window() {
        let window = PageWindow::new(0, 5).expect("valid window");
        assert!(window.has_next(7));
        assert_eq!(window.next(7).map(|w| w.page_number()), Some(1));

        assert!(!window.has_next(5));
        assert!(window.next(5).is_none());
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(matches!(
            PageWindow::new(-1, 5),
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            PageWindow::new(0, -5),
            Err(DomainError::Validation { .. })
        ));
        assert!(PageWindow::new(0, 0).is_err());
    }

    #[test]
    fn overflowing_windows_are_rejected() {
        assert!(PageWindow::new(i64::MAX, 2).is_err());
        assert!(PageWindow::new(i64::MAX / 2, 2).is_err());
    }
}
