//! Browsing state owned on behalf of the UI.
//!
//! # Responsibility
//! - Hold the current selection (category, query, checked topics) in
//!   explicit holders and re-run the pure filter engine on every change.
//! - Keep input timing (debounce) out of the engine itself.

pub mod browser;
pub mod debounce;
pub mod selection;
