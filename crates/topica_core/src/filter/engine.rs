//! Catalog filter engine.
//!
//! # Responsibility
//! - Reduce the catalog to the topics matching a category constraint and
//!   a free-text query.
//! - Shape results as borrowed views so callers never copy the snapshot.
//!
//! # Invariants
//! - Both stages are pass-through for their "no constraint" inputs.
//! - An unknown category name is a no-op, not an empty result.
//! - Result order is the source subsequence order; nothing is ranked.

use crate::model::catalog::{Catalog, Subtopic, Topic};
use std::collections::HashSet;

/// Category constraint for [`filter_topics`].
///
/// The document-level sentinel `"all"` means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Name(String),
}

impl CategoryFilter {
    /// Parses raw selector text, folding the `all` sentinel.
    ///
    /// The sentinel check is case-insensitive and ignores surrounding
    /// whitespace; anything else is taken verbatim as a category name.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Name(trimmed.to_string())
        }
    }
}

/// Policy for subtopics of a topic that matched only through its subtopics.
///
/// `KeepAll` keeps every subtopic of a surviving topic; `MatchesOnly`
/// narrows to the matching subtopics. A topic whose own name matches the
/// query keeps all subtopics in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtopicNarrowing {
    #[default]
    KeepAll,
    MatchesOnly,
}

/// Inputs for one filter invocation.
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub category: CategoryFilter,
    /// Free-text query; blank (after trimming) means no search constraint.
    pub query: String,
    pub narrowing: SubtopicNarrowing,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Borrowed view of one surviving topic.
///
/// `sub_topics` is the (possibly narrowed) source-order subset that the
/// renderer should show for this topic.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicView<'a> {
    pub topic: &'a Topic,
    pub sub_topics: Vec<&'a Subtopic>,
}

impl<'a> TopicView<'a> {
    fn full(topic: &'a Topic) -> Self {
        Self {
            topic,
            sub_topics: topic.sub_topics.iter().collect(),
        }
    }

    /// Topic name, borrowed from the catalog rather than the view.
    pub fn name(&self) -> &'a str {
        &self.topic.name
    }
}

/// Filters the catalog by category and query.
///
/// Pure function of its inputs: no I/O, no shared state, never panics.
/// The result is a source-order subsequence of `catalog.topics`; within
/// each view, `sub_topics` is a source-order subsequence of the topic's
/// subtopics.
pub fn filter_topics<'a>(catalog: &'a Catalog, params: &FilterParams) -> Vec<TopicView<'a>> {
    let topics = category_stage(catalog, &params.category);
    search_stage(topics, params)
}

fn category_stage<'a>(catalog: &'a Catalog, filter: &CategoryFilter) -> Vec<&'a Topic> {
    let CategoryFilter::Name(name) = filter else {
        return catalog.topics.iter().collect();
    };

    // A selector naming no known category falls through unfiltered.
    let Some(category) = catalog.category(name) else {
        return catalog.topics.iter().collect();
    };

    let referenced: HashSet<&str> = category.topic_names().collect();
    catalog
        .topics
        .iter()
        .filter(|topic| referenced.contains(topic.name.as_str()))
        .collect()
}

fn search_stage<'a>(topics: Vec<&'a Topic>, params: &FilterParams) -> Vec<TopicView<'a>> {
    let needle = params.query.trim().to_lowercase();
    if needle.is_empty() {
        return topics.into_iter().map(TopicView::full).collect();
    }

    let mut views = Vec::new();
    for topic in topics {
        let name_matches = contains_ci(&topic.name, &needle);
        let matching: Vec<&Subtopic> = topic
            .sub_topics
            .iter()
            .filter(|sub| subtopic_matches(sub, &needle))
            .collect();

        if !name_matches && matching.is_empty() {
            continue;
        }

        let sub_topics = match params.narrowing {
            SubtopicNarrowing::MatchesOnly if !name_matches => matching,
            _ => topic.sub_topics.iter().collect(),
        };
        views.push(TopicView { topic, sub_topics });
    }
    views
}

fn subtopic_matches(sub: &Subtopic, needle: &str) -> bool {
    contains_ci(&sub.title, needle) || sub.tags.iter().any(|tag| contains_ci(&tag.label, needle))
}

// `needle` must already be lowercased by the caller.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
