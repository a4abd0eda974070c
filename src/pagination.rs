//! Paging over the sorted transaction list.

use std::ops::Range;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Tracks the current 1-based page of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A pager on page 1; a page size of zero is treated as one
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `len` items, 0 when there are none
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Index range of the current page within `len` items
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// The items shown on the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.total_pages(len)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Advance one page; returns whether the page changed
    pub fn next(&mut self, len: usize) -> bool {
        if self.has_next(len) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns whether the page changed
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamped into `1..=total_pages`
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.page = page.max(1);
        self.clamp(len);
    }

    /// Pull the page back onto the last non-empty page after items were removed
    pub fn clamp(&mut self, len: usize) {
        let last = self.total_pages(len).max(1);
        if self.page > last {
            self.page = last;
        }
    }
}
