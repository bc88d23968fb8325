//! Page cursor for client-side list slicing.

/// Page sizes the UI offers, in cycle order.
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The (index, size) pair determining which slice of a list is displayed.
/// Invariant: `page * page_size` stays inside the backing list; every
/// page-size change resets the page to 0, which is the simplest policy that
/// can never produce an out-of-range slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageCursor {
    /// Cursor at page 0 with the given size. Sizes outside `PAGE_SIZES` fall
    /// back to the default.
    pub fn new(page_size: usize) -> Self {
        let page_size = if PAGE_SIZES.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self { page: 0, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `len` items. Never 0, so an empty list
    /// still has a page to stand on.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&mut self, len: usize) {
        if self.page + 1 < self.page_count(len) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Switch to a new page size and jump back to the first page. Sizes
    /// outside `PAGE_SIZES` are ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if !PAGE_SIZES.contains(&page_size) {
            return;
        }
        self.page_size = page_size;
        self.page = 0;
    }

    /// Step to the next size in `PAGE_SIZES`, wrapping around.
    pub fn cycle_page_size(&mut self) {
        let idx = PAGE_SIZES
            .iter()
            .position(|&s| s == self.page_size)
            .unwrap_or(0);
        self.set_page_size(PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()]);
    }

    /// The currently visible slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Human-readable range, e.g. "21-25 of 25".
    pub fn range_display(&self, len: usize) -> String {
        if len == 0 {
            return "0 of 0".to_string();
        }
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(len);
        format!("{}-{} of {}", start + 1, end, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_full_and_partial_pages() {
        let items: Vec<u32> = (0..25).collect();
        let mut cursor = PageCursor::new(10);
        assert_eq!(cursor.slice(&items), &items[0..10]);

        cursor.next_page(items.len());
        cursor.next_page(items.len());
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.slice(&items), &items[20..25]);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let items: Vec<u32> = (0..25).collect();
        let mut cursor = PageCursor::new(10);
        cursor.next_page(items.len());
        cursor.next_page(items.len());

        cursor.set_page_size(5);
        assert_eq!(cursor.page(), 0);
        assert_eq!(cursor.slice(&items), &items[0..5]);
    }

    #[test]
    fn next_page_stops_at_last_page() {
        let items: Vec<u32> = (0..25).collect();
        let mut cursor = PageCursor::new(25);
        cursor.next_page(items.len());
        assert_eq!(cursor.page(), 0);

        let mut cursor = PageCursor::new(10);
        for _ in 0..10 {
            cursor.next_page(items.len());
        }
        assert_eq!(cursor.page(), 2);
    }

    #[test]
    fn prev_page_saturates_at_zero() {
        let mut cursor = PageCursor::default();
        cursor.prev_page();
        assert_eq!(cursor.page(), 0);
    }

    #[test]
    fn cycles_through_all_page_sizes() {
        let mut cursor = PageCursor::new(5);
        cursor.cycle_page_size();
        assert_eq!(cursor.page_size(), 10);
        cursor.cycle_page_size();
        assert_eq!(cursor.page_size(), 25);
        cursor.cycle_page_size();
        assert_eq!(cursor.page_size(), 5);
    }

    #[test]
    fn invalid_page_size_is_ignored() {
        let mut cursor = PageCursor::new(10);
        cursor.set_page_size(7);
        assert_eq!(cursor.page_size(), 10);

        let cursor = PageCursor::new(0);
        assert_eq!(cursor.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn empty_list_yields_empty_slice() {
        let items: Vec<u32> = Vec::new();
        let cursor = PageCursor::default();
        assert!(cursor.slice(&items).is_empty());
        assert_eq!(cursor.page_count(0), 1);
        assert_eq!(cursor.range_display(0), "0 of 0");
    }

    #[test]
    fn range_display_matches_visible_slice() {
        let mut cursor = PageCursor::new(10);
        cursor.next_page(25);
        cursor.next_page(25);
        assert_eq!(cursor.range_display(25), "21-25 of 25");
    }
}
