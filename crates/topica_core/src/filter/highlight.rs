//! Highlight span extraction.
//!
//! # Responsibility
//! - Report where a query matches inside display text, as data.
//! - Leave visual marking entirely to rendering collaborators.
//!
//! # Invariants
//! - Spans are non-overlapping and ordered left to right.
//! - Query text is matched literally; regex metacharacters are inert.

use regex::RegexBuilder;

/// Half-open byte range `[start, end)` of one match inside the input text.
///
/// Offsets always fall on character boundaries of the input, so a span is
/// directly usable for slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// Finds all case-insensitive occurrences of `query` in `text`.
///
/// Returns spans in left-to-right order; overlapping occurrences are
/// reported greedily from the left, matching scan order. A blank query or
/// empty text yields no spans. Never fails.
pub fn highlight_spans(text: &str, query: &str) -> Vec<HighlightSpan> {
    let query = query.trim();
    if text.is_empty() || query.is_empty() {
        return Vec::new();
    }

    // An escaped literal is always a valid pattern.
    let Ok(matcher) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return Vec::new();
    };

    matcher
        .find_iter(text)
        .map(|found| HighlightSpan {
            start: found.start(),
            end: found.end(),
        })
        .collect()
}
