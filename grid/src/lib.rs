//! Headless data-table engine for the fee portal.
//!
//! This crate owns everything a table does that is not drawing: projecting
//! rows into typed cell values, free-text search, single-column sorting,
//! pagination, and row selection. It has no UI dependency; the `client`
//! crate wraps [`table::TableState`] in a Leptos signal and renders the
//! resulting [`table::TableView`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`value`] | [`value::CellValue`] and locale-aware text ordering |
//! | [`column`] | The [`column::Row`] trait and generic [`column::Column`] descriptors |
//! | [`search`] | Case-insensitive row filter |
//! | [`sort`] | Sort state, toggling, and the stable comparator |
//! | [`page`] | Rows-per-page options, page math, pager items |
//! | [`selection`] | Selected row keys and select-all semantics |
//! | [`table`] | [`table::TableState`] and the search → sort → paginate pipeline |

pub mod column;
pub mod page;
pub mod search;
pub mod selection;
pub mod sort;
pub mod table;
pub mod value;

pub use column::{Column, Row};
pub use selection::RowKey;
pub use sort::SortDirection;
pub use table::{TableOptions, TableState, TableView};
pub use value::CellValue;
