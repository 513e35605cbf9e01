//! Page windows over the bus listing.

use std::ops::Range;

use thiserror::Error;

/// Raised when the current page has no rows to show.
///
/// Configuration validation forbids an empty fleet, so this is a
/// defensive guard rather than a reachable state in normal operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// The page window starts past the end of the listing.
    #[error("No data to display for the current page")]
    NoData,
}

/// Cursor over fixed-size pages of a listing.
///
/// Navigation clamps at both ends; it never wraps and never fails.
/// The current page survives leaving and re-entering the listing, which
/// is why the frontend holds one `Pager` for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    item_count: usize,
    page_size: usize,
    current: usize,
}

impl Pager {
    /// Build a pager positioned on the first page.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            item_count,
            page_size: page_size.max(1),
            current: 1,
        }
    }

    /// 1-based number of the current page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages needed to show every item.
    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.page_size)
    }

    /// Index range of the items on the current page.
    pub fn window(&self) -> Result<Range<usize>, PageError> {
        let start = (self.current - 1) * self.page_size;
        if start >= self.item_count {
            return Err(PageError::NoData);
        }
        let end = (start + self.page_size).min(self.item_count);
        Ok(start..end)
    }

    /// Jump to the first page.
    pub fn first(&mut self) {
        self.current = 1;
    }

    /// Advance one page, clamping at the last.
    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.total_pages().max(1));
    }

    /// Step back one page, clamping at the first.
    pub fn previous(&mut self) {
        self.current = (self.current - 1).max(1);
    }

    /// Jump to the last page.
    pub fn last(&mut self) {
        self.current = self.total_pages().max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pager::new(12, 5).total_pages(), 3);
        assert_eq!(Pager::new(10, 5).total_pages(), 2);
        assert_eq!(Pager::new(1, 5).total_pages(), 1);
        assert_eq!(Pager::new(5, 1).total_pages(), 5);
    }

    #[test]
    fn window_covers_the_partial_last_page() {
        let mut pager = Pager::new(12, 5);
        assert_eq!(pager.window(), Ok(0..5));
        pager.last();
        assert_eq!(pager.current(), 3);
        assert_eq!(pager.window(), Ok(10..12));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut pager = Pager::new(12, 5);
        pager.previous();
        assert_eq!(pager.current(), 1);

        pager.last();
        pager.next();
        assert_eq!(pager.current(), 3);

        pager.next();
        assert_eq!(pager.current(), 3);

        pager.first();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn single_page_listing_never_moves() {
        let mut pager = Pager::new(3, 5);
        pager.next();
        pager.last();
        assert_eq!(pager.current(), 1);
        assert_eq!(pager.window(), Ok(0..3));
    }

    #[test]
    fn empty_listing_reports_no_data() {
        let mut pager = Pager::new(0, 5);
        assert_eq!(pager.window(), Err(PageError::NoData));
        // clamped navigation keeps the cursor on page 1 even with no pages
        pager.next();
        pager.last();
        assert_eq!(pager.current(), 1);
        assert_eq!(pager.window(), Err(PageError::NoData));
    }
}
