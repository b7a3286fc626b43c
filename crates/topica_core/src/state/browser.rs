//! Catalog browsing state holder.
//!
//! # Responsibility
//! - Own the loaded snapshot plus the current category/query selection.
//! - Re-run the pure filter engine whenever results are requested.
//!
//! # Invariants
//! - Every selection change goes through a setter; nothing is ambient.
//! - Query edits pass the debounce gate unless explicitly immediate.

use crate::filter::engine::{filter_topics, CategoryFilter, FilterParams, SubtopicNarrowing, TopicView};
use crate::model::catalog::{Catalog, CatalogStats};
use crate::state::debounce::DebounceGate;
use log::debug;
use std::time::Instant;

/// Single owner of the "current selection" for one browsing surface.
///
/// The holder is deliberately thin: it threads explicit state into
/// [`filter_topics`] and adds nothing of its own to the match semantics.
#[derive(Debug)]
pub struct CatalogBrowser {
    catalog: Catalog,
    params: FilterParams,
    gate: DebounceGate,
}

impl CatalogBrowser {
    /// Wraps a loaded snapshot with an unconstrained selection.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_narrowing(catalog, SubtopicNarrowing::default())
    }

    /// Wraps a snapshot with an explicit subtopic narrowing policy.
    pub fn with_narrowing(catalog: Catalog, narrowing: SubtopicNarrowing) -> Self {
        Self {
            catalog,
            params: FilterParams {
                narrowing,
                ..FilterParams::new()
            },
            gate: DebounceGate::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.params.category
    }

    pub fn query(&self) -> &str {
        &self.params.query
    }

    /// Selects a category from raw selector text (`"all"` clears it).
    pub fn select_category(&mut self, raw: &str) {
        self.params.category = CategoryFilter::parse(raw);
        debug!(
            "event=category_select module=state selected={}",
            match &self.params.category {
                CategoryFilter::All => "all",
                CategoryFilter::Name(name) => name.as_str(),
            }
        );
    }

    /// Applies query text immediately, bypassing the debounce gate.
    ///
    /// The immediate path is for explicit submissions (enter key, search
    /// button); typed input should use [`Self::queue_query`].
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.params.query = query.into();
    }

    /// Queues typed query input behind the debounce gate.
    pub fn queue_query(&mut self, query: impl Into<String>, now: Instant) {
        self.gate.submit(query, now);
    }

    /// Applies a queued query once its quiet period has elapsed.
    ///
    /// Returns `true` when the effective query changed and results should
    /// be re-rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.gate.poll(now) {
            Some(query) => {
                self.params.query = query;
                true
            }
            None => false,
        }
    }

    /// Applies any queued query immediately.
    pub fn flush_query(&mut self) -> bool {
        match self.gate.flush() {
            Some(query) => {
                self.params.query = query;
                true
            }
            None => false,
        }
    }

    /// Clears the query (and anything still queued).
    pub fn clear_search(&mut self) {
        self.gate.flush();
        self.params.query.clear();
    }

    /// Resets to the unconstrained view: all categories, no query.
    pub fn show_all(&mut self) {
        self.clear_search();
        self.params.category = CategoryFilter::All;
    }

    /// Runs the filter engine over the current selection.
    pub fn results(&self) -> Vec<TopicView<'_>> {
        filter_topics(&self.catalog, &self.params)
    }

    /// Returns `true` when the current selection matches nothing, the
    /// signal renderers use for their "no results" state.
    pub fn is_empty_result(&self) -> bool {
        self.results().is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }
}
