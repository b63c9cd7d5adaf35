//! Selection and filter state over a loaded catalog
//!
//! Selection and visibility are independent:
//! - `toggle`/`set_selected` flip one entry whether or not it is visible
//! - `select_all_visible` touches only entries matching the current filter
//! - `deselect_all` clears every entry regardless of the filter
//! - changing the filter never alters selection
//!
//! Mutators report the new state as return values; there is no event dispatch.

use crate::domain::CatalogEntry;

/// Per-entry selection flags plus the active name filter
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    entries: Vec<CatalogEntry>,
    selected: Vec<bool>,
    /// Filter as typed, for display
    filter_text: String,
    /// Lowercased filter used for matching
    filter: String,
}

impl SelectionModel {
    /// Model over `entries` with nothing selected and no filter
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let selected = vec![false; entries.len()];
        Self {
            entries,
            selected,
            filter_text: String::new(),
            filter: String::new(),
        }
    }

    /// Replace the catalog; selection starts empty, the filter is kept
    pub fn load(&mut self, entries: Vec<CatalogEntry>) {
        self.selected = vec![false; entries.len()];
        self.entries = entries;
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Flip one entry; returns its new state, or `None` for a bad index
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let flag = self.selected.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Set one entry; returns `false` for a bad index
    pub fn set_selected(&mut self, index: usize, value: bool) -> bool {
        match self.selected.get_mut(index) {
            Some(flag) => {
                *flag = value;
                true
            }
            None => false,
        }
    }

    /// Set the filter; empty text shows everything
    pub fn apply_filter(&mut self, text: &str) {
        self.filter_text = text.to_string();
        self.filter = text.to_lowercase();
    }

    pub fn clear_filter(&mut self) {
        self.apply_filter("");
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|e| e.matches_filter(&self.filter))
    }

    /// Indices of entries matching the filter, in catalog order
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.entries.len())
            .filter(|&i| self.is_visible(i))
            .collect()
    }

    pub fn visible_entries(&self) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.matches_filter(&self.filter))
            .collect()
    }

    /// Select every visible entry; hidden entries keep their state
    ///
    /// Returns the total selected count afterwards.
    pub fn select_all_visible(&mut self) -> usize {
        for index in self.visible_indices() {
            self.selected[index] = true;
        }
        self.selected_count()
    }

    /// Clear every entry, visible or not
    pub fn deselect_all(&mut self) {
        self.selected.fill(false);
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    /// Selected entries in catalog order
    pub fn selected_entries(&self) -> Vec<CatalogEntry> {
        self.entries
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(entry, _)| entry.clone())
            .collect()
    }

    /// Clear the flag of every entry named in `processed`
    pub fn clear_processed(&mut self, processed: &[CatalogEntry]) {
        for entry in processed {
            if let Some(index) = self.position(&entry.name) {
                self.selected[index] = false;
            }
        }
    }
}
