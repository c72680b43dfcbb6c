//! Table state and the search → sort → paginate pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`TableState`] belongs to one rendered table. The UI layer keeps it in
//! a signal, mutates it from event handlers, and derives a [`TableView`] from
//! the current rows whenever anything changes.
//!
//! DESIGN
//! ======
//! The view borrows the input rows and never reorders or mutates them. The
//! stored page may be stale relative to the data; the view clamps it, and
//! [`TableState::settle`] writes the clamped page back and prunes the
//! selection to the keys actually rendered.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::column::{Column, Row, find_column};
use crate::page::{PageItem, PageSummary, RowsPerPage, clamp_page, page_bounds, page_count, page_items};
use crate::search::filter_rows;
use crate::selection::{RowKey, Selection};
use crate::sort::{SortIndicator, SortState, sort_rows};

// =============================================================================
// OPTIONS
// =============================================================================

/// Static configuration for one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub sortable: bool,
    pub pagination: bool,
    pub searchable: bool,
    pub selectable: bool,
    pub rows_per_page_options: Vec<usize>,
    pub default_rows_per_page: usize,
    /// Field whose stringified value identifies a row.
    pub row_key: String,
    pub empty_message: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sortable: true,
            pagination: true,
            searchable: false,
            selectable: false,
            rows_per_page_options: crate::page::DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
            default_rows_per_page: crate::page::DEFAULT_ROWS_PER_PAGE,
            row_key: "id".to_owned(),
            empty_message: "No data available".to_owned(),
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Mutable interaction state: sort, page, page size, search term, selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    options: TableOptions,
    sort: SortState,
    page: usize,
    rows_per_page: RowsPerPage,
    search: String,
    selection: Selection,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl TableState {
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        let rows_per_page = RowsPerPage::new(&options.rows_per_page_options, options.default_rows_per_page);
        Self {
            options,
            sort: SortState::default(),
            page: 1,
            rows_per_page,
            search: String::new(),
            selection: Selection::default(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    #[must_use]
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn rows_per_page(&self) -> &RowsPerPage {
        &self.rows_per_page
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Header indicator for `field`; neutral when sorting is off.
    #[must_use]
    pub fn indicator(&self, field: &str) -> SortIndicator {
        if self.options.sortable {
            self.sort.indicator(field)
        } else {
            SortIndicator::Neutral
        }
    }

    /// New input rows: back to page 1 with nothing selected. Returns whether
    /// the selection changed.
    pub fn reset_for_new_data(&mut self) -> bool {
        self.page = 1;
        self.selection.clear()
    }

    /// Returns whether the selection changed.
    pub fn set_search(&mut self, term: &str) -> bool {
        if self.search == term {
            return false;
        }
        term.clone_into(&mut self.search);
        self.page = 1;
        self.selection.clear()
    }

    /// Header click. Ignored when sorting is off or the column opts out.
    pub fn toggle_sort<R>(&mut self, column: &Column<R>) -> bool {
        if !self.options.sortable || !column.is_sortable() {
            return false;
        }
        self.sort.toggle(column.field());
        true
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change rows-per-page; sizes outside the options are ignored.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if self.rows_per_page.set(size) {
            self.page = 1;
            true
        } else {
            false
        }
    }

    /// Returns whether `key` is now selected.
    pub fn toggle_row(&mut self, key: &str) -> bool {
        self.selection.toggle(key)
    }

    pub fn toggle_all(&mut self, page_keys: &[RowKey]) {
        self.selection.toggle_all(page_keys);
    }

    /// Returns whether anything was removed.
    pub fn prune_selection(&mut self, visible: &[RowKey]) -> bool {
        self.selection.retain_visible(visible)
    }

    /// Store the view's clamped page and prune the selection to its keys.
    /// Returns whether the selection changed.
    pub fn settle<R>(&mut self, view: &TableView<'_, R>) -> bool {
        self.page = view.page;
        self.prune_selection(&view.keys)
    }

    /// Run the pipeline over `rows`.
    #[must_use]
    pub fn view<'a, R: Row>(&self, rows: &'a [R], columns: &[Column<R>]) -> TableView<'a, R> {
        let all: Vec<&'a R> = rows.iter().collect();

        let mut processed = if self.options.searchable {
            filter_rows(&all, columns, &self.search)
        } else {
            all
        };

        if self.options.sortable {
            if let Some(field) = self.sort.field() {
                match find_column(columns, field) {
                    Some(column) => sort_rows(&mut processed, column, self.sort.direction()),
                    None => sort_rows(&mut processed, &Column::new(field), self.sort.direction()),
                }
            }
        }

        let filtered_count = processed.len();
        let (page, pages, page_size) = if self.options.pagination {
            let size = self.rows_per_page.current();
            let pages = page_count(filtered_count, size);
            let page = clamp_page(self.page, pages);
            let bounds = page_bounds(page, size, filtered_count);
            processed = processed[bounds].to_vec();
            (page, pages, size)
        } else {
            (1, 1, filtered_count)
        };

        let keys = processed.iter().map(|row| row_key(*row, &self.options.row_key)).collect();

        TableView {
            rows: processed,
            keys,
            filtered_count,
            page,
            page_count: pages,
            page_size,
            pagination: self.options.pagination,
        }
    }
}

/// Stringified key of `row`.
#[must_use]
pub fn row_key<R: Row>(row: &R, key_field: &str) -> RowKey {
    row.field(key_field).to_string()
}

// =============================================================================
// VIEW
// =============================================================================

/// The rows to render for the current state.
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    /// Row keys, parallel to `rows`.
    pub keys: Vec<RowKey>,
    /// Rows left after search, before pagination.
    pub filtered_count: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pagination: bool,
}

impl<R> TableView<'_, R> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn shows_pager(&self) -> bool {
        self.pagination && self.page_count > 1
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    #[must_use]
    pub fn page_items(&self) -> Vec<PageItem> {
        page_items(self.page, self.page_count)
    }

    #[must_use]
    pub fn summary(&self) -> Option<PageSummary> {
        PageSummary::new(self.page, self.page_size, self.filtered_count)
    }
}
