//! Free-text row filter.
//!
//! A row passes when any column's effective value, stringified and
//! lowercased, contains the lowercased term. Blank cells never match.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::column::{Column, Row};

/// True when `row` matches `term_lower`, which must already be lowercased.
pub fn row_matches<R: Row>(row: &R, columns: &[Column<R>], term_lower: &str) -> bool {
    columns.iter().any(|column| {
        let value = column.value(row);
        !value.is_blank() && value.to_string().to_lowercase().contains(term_lower)
    })
}

/// Keep the rows that match `term`. An empty term keeps everything.
pub fn filter_rows<'a, R: Row>(rows: &[&'a R], columns: &[Column<R>], term: &str) -> Vec<&'a R> {
    if term.is_empty() {
        return rows.to_vec();
    }
    let term_lower = term.to_lowercase();
    rows.iter()
        .copied()
        .filter(|row| row_matches(*row, columns, &term_lower))
        .collect()
}
