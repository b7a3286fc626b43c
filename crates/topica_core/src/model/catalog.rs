//! Catalog domain model.
//!
//! # Responsibility
//! - Mirror the wire shape of the catalog document (topics, categories).
//! - Provide lookup and overview helpers over the loaded snapshot.
//!
//! # Invariants
//! - The catalog is never mutated after load; filtering produces views.
//! - Source ordering of topics, subtopics and tags is preserved.

use serde::{Deserialize, Serialize};

/// Sentinel URL value meaning "no link yet" in the source document.
pub const PLACEHOLDER_URL: &str = "placeholder";

/// Label attached to a subtopic, optionally carrying its own link.
///
/// The document encodes tags either as a bare string (`"rust"`) or as an
/// object with an explicit link; both decode into this one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TagRepr")]
pub struct Tag {
    pub label: String,
    pub url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagRepr {
    Bare(String),
    Linked { label: String, url: Option<String> },
}

impl From<TagRepr> for Tag {
    fn from(value: TagRepr) -> Self {
        match value {
            TagRepr::Bare(label) => Self { label, url: None },
            TagRepr::Linked { label, url } => Self { label, url },
        }
    }
}

impl Tag {
    /// Creates an unlinked tag.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }

    /// Returns the tag link when it is actionable.
    pub fn action_url(&self) -> Option<&str> {
        actionable(self.url.as_deref())
    }
}

/// Leaf catalog entry with a title, optional link, optional notes and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtopic {
    pub title: String,
    pub url: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Subtopic {
    /// Returns the subtopic link when it is actionable.
    ///
    /// Absent, empty and placeholder URLs are all "not actionable"; link
    /// opening collaborators must never be handed one of those.
    pub fn action_url(&self) -> Option<&str> {
        actionable(self.url.as_deref())
    }
}

/// Top-level catalog entry holding an ordered run of subtopics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub notes: Option<String>,
    /// Serialized as `subTopics` to match the document schema.
    #[serde(rename = "subTopics", default)]
    pub sub_topics: Vec<Subtopic>,
}

/// Weak by-name reference from a category to a topic.
///
/// `topic` must equal some `Topic::name` to contribute; a dangling
/// reference is simply inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategoryRef {
    pub topic: String,
    pub label: String,
}

/// Named grouping of topics used by the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub notes: Option<String>,
    /// Serialized as `subCategories` to match the document schema.
    #[serde(rename = "subCategories", default)]
    pub sub_categories: Vec<SubCategoryRef>,
}

impl Category {
    /// Iterates the topic names this category references, in source order.
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.sub_categories.iter().map(|r| r.topic.as_str())
    }
}

/// Overview totals across the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub topics: usize,
    pub sub_topics: usize,
    pub categories: usize,
    pub tags: usize,
}

/// The whole loaded document: topics plus categories.
///
/// Constructed once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Looks up a category by exact name. Misses are not an error.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Looks up a topic by exact name. Misses are not an error.
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Returns overview totals for sidebar-style summaries.
    pub fn stats(&self) -> CatalogStats {
        let sub_topics = self.topics.iter().map(|t| t.sub_topics.len()).sum();
        let tags = self
            .topics
            .iter()
            .flat_map(|t| &t.sub_topics)
            .map(|s| s.tags.len())
            .sum();

        CatalogStats {
            topics: self.topics.len(),
            sub_topics,
            categories: self.categories.len(),
            tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

fn actionable(url: Option<&str>) -> Option<&str> {
    url.filter(|value| !value.is_empty() && *value != PLACEHOLDER_URL)
}
