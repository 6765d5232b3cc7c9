//! Client-side pagination for lists already held in memory.

/// Default number of rows per page for member and role tables.
pub const DEFAULT_PER_PAGE: usize = 5;

/// Page cursor over a list of `total` items.
///
/// Pages are 1-indexed. An empty list still has one (empty) page so the
/// cursor never points at page 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
    total: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0, DEFAULT_PER_PAGE)
    }
}

impl Paginator {
    /// Creates a cursor on page 1.
    #[must_use]
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total,
        }
    }

    /// Current page (1-indexed).
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages, at least 1.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Whether pagination controls are worth showing.
    #[must_use]
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages() > 1
    }

    /// Whether a previous page exists.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Moves forward one page, stopping at the last.
    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.total_pages());
    }

    /// Moves back one page, stopping at the first.
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Jumps to `page`, clamped to the valid range.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Updates the item count after rows were removed or reloaded.
    ///
    /// The cursor is clamped so it never points past the last page.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.min(self.total_pages());
    }

    /// Index range of the current page.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    /// Rows of the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_one_page() {
        let pager = Paginator::default();
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.has_multiple_pages());
        assert!(pager.range().is_empty());
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut pager = Paginator::new(12, 5);
        assert_eq!(pager.total_pages(), 3);

        pager.prev();
        assert_eq!(pager.page(), 1);

        pager.next();
        pager.next();
        pager.next();
        assert_eq!(pager.page(), 3);
        assert!(!pager.has_next());
        assert_eq!(pager.range(), 10..12);
    }

    #[test]
    fn test_slice_returns_current_rows() {
        let rows: Vec<u32> = (1..=7).collect();
        let mut pager = Paginator::new(rows.len(), 5);
        assert_eq!(pager.slice(&rows), &[1, 2, 3, 4, 5]);

        pager.next();
        assert_eq!(pager.slice(&rows), &[6, 7]);
    }

    #[test]
    fn test_shrinking_total_pulls_cursor_back() {
        let mut pager = Paginator::new(6, 5);
        pager.go_to(2);
        pager.set_total(5);
        assert_eq!(pager.page(), 1);
    }
}
