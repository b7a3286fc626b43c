//! Checked-set topic selection for per-topic sidebar filtering.
//!
//! Names not present in the catalog may be stored but never match.

use crate::model::catalog::{Catalog, Topic};
use std::collections::BTreeSet;

/// Explicit set of checked topic names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSelection {
    selected: BTreeSet<String>,
}

impl TopicSelection {
    /// Creates an empty selection (nothing checked).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection with every topic of `catalog` checked.
    pub fn all_of(catalog: &Catalog) -> Self {
        let mut selection = Self::new();
        selection.select_all(catalog);
        selection
    }

    /// Checks every topic of `catalog`, dropping any stale names.
    pub fn select_all(&mut self, catalog: &Catalog) {
        self.selected = catalog
            .topics
            .iter()
            .map(|topic| topic.name.clone())
            .collect();
    }

    /// Unchecks everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Checks or unchecks one topic by name.
    pub fn set(&mut self, name: &str, checked: bool) {
        if checked {
            self.selected.insert(name.to_string());
        } else {
            self.selected.remove(name);
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the checked topics of `catalog` in source order.
    pub fn filter_topics<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Topic> {
        catalog
            .topics
            .iter()
            .filter(|topic| self.is_selected(&topic.name))
            .collect()
    }
}
