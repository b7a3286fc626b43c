//! Catalog snapshot model.
//!
//! # Responsibility
//! - Define the canonical data structures parsed from the catalog document.
//! - Keep one immutable shape that every derived view borrows from.
//!
//! # Invariants
//! - Topic names are unique within a loaded catalog.
//! - Category references resolve by name equality; dangling references are
//!   tolerated and contribute nothing.

pub mod catalog;
