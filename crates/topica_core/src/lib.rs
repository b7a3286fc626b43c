//! Core domain logic for Topica, a static catalog browser.
//! This crate is the single source of truth for filtering semantics.

pub mod filter;
pub mod loader;
pub mod logging;
pub mod model;
pub mod state;

pub use filter::engine::{
    filter_topics, CategoryFilter, FilterParams, SubtopicNarrowing, TopicView,
};
pub use filter::highlight::{highlight_spans, HighlightSpan};
pub use loader::{load_catalog, parse_catalog, LoadError, LoadResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{
    Catalog, CatalogStats, Category, SubCategoryRef, Subtopic, Tag, Topic, PLACEHOLDER_URL,
};
pub use state::browser::CatalogBrowser;
pub use state::debounce::{DebounceGate, DEFAULT_QUIET_PERIOD};
pub use state::selection::TopicSelection;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
