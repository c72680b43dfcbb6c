//! Column descriptors and the row abstraction they read from.
//!
//! DESIGN
//! ======
//! A table is generic over its row type. The only thing the engine needs
//! from a row is field lookup by name ([`Row::field`]); a column may
//! override that with a typed selector closure. Rendering beyond plain text
//! is left to the UI layer, which pairs a `Column<R>` with its own view
//! renderer.

#[cfg(test)]
#[path = "column_test.rs"]
mod column_test;

use std::fmt;
use std::sync::Arc;

use crate::value::CellValue;

/// A record that can be projected by field name.
pub trait Row {
    /// Raw value of `name`, or [`CellValue::Null`] when the field is absent.
    fn field(&self, name: &str) -> CellValue;
}

impl Row for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).map_or(CellValue::Null, CellValue::from)
    }
}

impl Row for serde_json::Value {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).map_or(CellValue::Null, CellValue::from)
    }
}

/// Typed accessor from a row to its sortable/searchable value.
pub type Selector<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;

/// Plain-text renderer for a cell.
pub type Formatter<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Describes how one field of a row is projected and displayed.
pub struct Column<R> {
    field: String,
    header: Option<String>,
    selector: Option<Selector<R>>,
    formatter: Option<Formatter<R>>,
    sortable: bool,
    width: Option<String>,
    header_class: Option<String>,
    cell_class: Option<String>,
}

impl<R> Column<R> {
    /// A sortable column reading the raw `field` of each row.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: None,
            selector: None,
            formatter: None,
            sortable: true,
            width: None,
            header_class: None,
            cell_class: None,
        }
    }

    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Replace raw field lookup with a typed accessor. Sorting and search both
    /// use the selector's value.
    #[must_use]
    pub fn selector<F>(mut self, selector: F) -> Self
    where
        F: Fn(&R) -> CellValue + Send + Sync + 'static,
    {
        self.selector = Some(Arc::new(selector));
        self
    }

    /// Display text for the cell. Does not affect sorting or search.
    #[must_use]
    pub fn format<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn cell_class(mut self, class: impl Into<String>) -> Self {
        self.cell_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Header text, falling back to the field identifier.
    #[must_use]
    pub fn header_text(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.field)
    }

    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    #[must_use]
    pub fn width_style(&self) -> Option<&str> {
        self.width.as_deref()
    }

    #[must_use]
    pub fn header_class_name(&self) -> Option<&str> {
        self.header_class.as_deref()
    }

    #[must_use]
    pub fn cell_class_name(&self) -> Option<&str> {
        self.cell_class.as_deref()
    }

    #[must_use]
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }
}

impl<R: Row> Column<R> {
    /// Effective value: the selector when present, else the raw field.
    pub fn value(&self, row: &R) -> CellValue {
        match &self.selector {
            Some(selector) => selector(row),
            None => row.field(&self.field),
        }
    }

    /// Display text: the formatter when present, else the effective value.
    pub fn display(&self, row: &R) -> String {
        match &self.formatter {
            Some(formatter) => formatter(row),
            None => self.value(row).to_string(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            header: self.header.clone(),
            selector: self.selector.clone(),
            formatter: self.formatter.clone(),
            sortable: self.sortable,
            width: self.width.clone(),
            header_class: self.header_class.clone(),
            cell_class: self.cell_class.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("has_selector", &self.selector.is_some())
            .field("has_formatter", &self.formatter.is_some())
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Find the column for `field`.
pub fn find_column<'c, R>(columns: &'c [Column<R>], field: &str) -> Option<&'c Column<R>> {
    columns.iter().find(|c| c.field == field)
}
