//! Row selection keyed by the table's row-key field.
//!
//! Keys keep insertion order so callbacks report selections in the order the
//! user made them.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// String form of a row's key field.
pub type RowKey = String;

/// Ordered set of selected row keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<RowKey>,
}

impl Selection {
    #[must_use]
    pub fn keys(&self) -> &[RowKey] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Add `key` if absent, remove it if present. Returns whether it is now
    /// selected.
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(pos) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(pos);
            false
        } else {
            self.keys.push(key.to_owned());
            true
        }
    }

    /// True when `page_keys` is non-empty and every key in it is selected.
    #[must_use]
    pub fn all_selected(&self, page_keys: &[RowKey]) -> bool {
        !page_keys.is_empty() && page_keys.iter().all(|k| self.contains(k))
    }

    /// Select-all checkbox: clear when the whole page is selected, otherwise
    /// replace the selection with exactly the page's keys.
    pub fn toggle_all(&mut self, page_keys: &[RowKey]) {
        if self.all_selected(page_keys) {
            self.keys.clear();
        } else {
            self.keys.clear();
            for key in page_keys {
                if !self.contains(key) {
                    self.keys.push(key.clone());
                }
            }
        }
    }

    /// Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.keys.is_empty();
        self.keys.clear();
        changed
    }

    /// Drop keys not present in `visible`. Returns whether anything was
    /// removed.
    pub fn retain_visible(&mut self, visible: &[RowKey]) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| visible.contains(k));
        self.keys.len() != before
    }
}
