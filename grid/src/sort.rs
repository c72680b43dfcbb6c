//! Single-column sort state and the stable comparator.
//!
//! DESIGN
//! ======
//! At most one field is sorted at a time. Equal values compare as equal so
//! the stable sort keeps input order for ties; everything else is ordered by
//! [`CellValue::compare`] and then flipped for descending.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::column::{Column, Row};
use crate::value::CellValue;

/// Sort direction for the active field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orient an ascending comparison result for this direction.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Header glyph state for one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}

impl SortIndicator {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Neutral => "↕",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Active sort field (if any) and its direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    field: Option<String>,
    direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self { field: Some(field.into()), direction }
    }

    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Header click: flip the active field, or activate another ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_owned());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn clear(&mut self) {
        self.field = None;
        self.direction = SortDirection::Asc;
    }

    #[must_use]
    pub fn indicator(&self, field: &str) -> SortIndicator {
        match (self.field.as_deref() == Some(field), self.direction) {
            (false, _) => SortIndicator::Neutral,
            (true, SortDirection::Asc) => SortIndicator::Ascending,
            (true, SortDirection::Desc) => SortIndicator::Descending,
        }
    }
}

/// Comparator over effective values.
#[must_use]
pub fn compare_values(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    direction.apply(a.compare(b))
}

/// Stable-sort `rows` in place by `column`'s effective value.
pub fn sort_rows<R: Row>(rows: &mut Vec<&R>, column: &Column<R>, direction: SortDirection) {
    let mut keyed: Vec<(CellValue, &R)> = rows.iter().map(|row| (column.value(row), *row)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_values(a, b, direction));
    rows.clear();
    rows.extend(keyed.into_iter().map(|(_, row)| row));
}
