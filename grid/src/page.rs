//! Pagination math and pager layout.
//!
//! Pages are 1-based. The pager always shows the first and last page plus a
//! window of up to three pages around the current one, with ellipses where
//! pages are skipped.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;
use std::ops::Range;

pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

// =============================================================================
// ROWS PER PAGE
// =============================================================================

/// The enumerated page-size options and the one currently in effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowsPerPage {
    options: Vec<usize>,
    current: usize,
}

impl RowsPerPage {
    /// Zero and duplicate options are dropped; an empty set falls back to
    /// [`DEFAULT_ROWS_PER_PAGE_OPTIONS`]. A `default` outside the set falls
    /// back to the first option.
    #[must_use]
    pub fn new(options: &[usize], default: usize) -> Self {
        let mut cleaned: Vec<usize> = Vec::with_capacity(options.len());
        for &size in options {
            if size > 0 && !cleaned.contains(&size) {
                cleaned.push(size);
            }
        }
        if cleaned.is_empty() {
            cleaned = DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec();
        }
        let current = if cleaned.contains(&default) { default } else { cleaned[0] };
        Self { options: cleaned, current }
    }

    #[must_use]
    pub fn options(&self) -> &[usize] {
        &self.options
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Switch to `size` if it is one of the options.
    pub fn set(&mut self, size: usize) -> bool {
        if self.options.contains(&size) {
            self.current = size;
            true
        } else {
            false
        }
    }
}

impl Default for RowsPerPage {
    fn default() -> Self {
        Self::new(&DEFAULT_ROWS_PER_PAGE_OPTIONS, DEFAULT_ROWS_PER_PAGE)
    }
}

// =============================================================================
// PAGE MATH
// =============================================================================

/// Number of pages needed for `row_count` rows; zero rows need zero pages.
#[must_use]
pub fn page_count(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    row_count.div_ceil(page_size)
}

/// Clamp `page` into `1..=page_count` (page 1 when there are no pages).
#[must_use]
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Half-open index range of `page` within `row_count` rows.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, row_count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(row_count);
    let end = page.saturating_mul(page_size).min(row_count);
    start..end
}

// =============================================================================
// PAGER ITEMS
// =============================================================================

/// One control in the pager strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Pager strip for `current` of `total` pages.
#[must_use]
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    let total = total.max(1);
    let current = clamp_page(current, total);
    let mut items = vec![
        PageItem::Previous { target: current.saturating_sub(1).max(1), disabled: current == 1 },
        PageItem::Page { number: 1, active: current == 1 },
    ];

    if current > 3 {
        items.push(PageItem::Ellipsis);
    }

    let window_start = current.saturating_sub(1).max(2);
    let window_end = (current + 1).min(total.saturating_sub(1));
    for number in window_start..=window_end {
        items.push(PageItem::Page { number, active: number == current });
    }

    if current + 2 < total {
        items.push(PageItem::Ellipsis);
    }

    if total > 1 {
        items.push(PageItem::Page { number: total, active: current == total });
    }

    items.push(PageItem::Next { target: (current + 1).min(total), disabled: current == total });
    items
}

// =============================================================================
// SUMMARY
// =============================================================================

/// "Showing X to Y of Z entries" footer figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl PageSummary {
    /// `None` when there are no rows to describe.
    #[must_use]
    pub fn new(page: usize, page_size: usize, total: usize) -> Option<Self> {
        let bounds = page_bounds(page, page_size, total);
        if bounds.is_empty() {
            return None;
        }
        Some(Self { from: bounds.start + 1, to: bounds.end, total })
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {} entries", self.from, self.to, self.total)
    }
}
