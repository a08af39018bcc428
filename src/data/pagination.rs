use std::ops::Range;

// ---------------------------------------------------------------------------
// Paginator – fixed-size window over the category list
// ---------------------------------------------------------------------------

/// Tracks which page of categories is shown.
///
/// A page `i` is displayable when `i * page_size < total_count`; the last
/// page may be partial. Requests for any other page leave the state alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
    total_count: usize,
}

impl Paginator {
    /// `page_size` is clamped to at least 1.
    pub fn new(page_size: usize, total_count: usize) -> Self {
        Paginator {
            page_index: 0,
            page_size: page_size.max(1),
            total_count,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Number of displayable pages.
    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    /// Item range of page `page_index`, or `None` if it is out of range.
    pub fn page_range(&self, page_index: usize) -> Option<Range<usize>> {
        let start = page_index.checked_mul(self.page_size)?;
        if start >= self.total_count {
            return None;
        }
        let end = start.saturating_add(self.page_size).min(self.total_count);
        Some(start..end)
    }

    /// Make `page_index` current. Out-of-range requests are a no-op.
    pub fn go_to(&mut self, page_index: usize) -> Option<Range<usize>> {
        let range = self.page_range(page_index)?;
        self.page_index = page_index;
        Some(range)
    }

    pub fn prev(&mut self) -> Option<Range<usize>> {
        let target = self.page_index.checked_sub(1)?;
        self.go_to(target)
    }

    pub fn next(&mut self) -> Option<Range<usize>> {
        let target = self.page_index.checked_add(1)?;
        self.go_to(target)
    }

    /// Range of the current page; empty when nothing is displayable.
    pub fn current(&self) -> Range<usize> {
        self.page_range(self.page_index).unwrap_or(0..0)
    }

    pub fn can_go_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        (self.page_index + 1).saturating_mul(self.page_size) < self.total_count
    }
}

/// Identifiers of `categories` that fall inside `range`, clipped to its length.
pub fn page_slice(categories: &[String], range: Range<usize>) -> &[String] {
    let end = range.end.min(categories.len());
    let start = range.start.min(end);
    &categories[start..end]
}
