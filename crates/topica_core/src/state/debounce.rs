//! Quiet-period coalescing for query input.
//!
//! # Responsibility
//! - Collapse rapid query edits into one pending value.
//! - Release the pending value after a quiet period, or immediately on
//!   an explicit flush.
//!
//! # Invariants
//! - The most recent submission is never dropped; it either fires on
//!   `poll` or on `flush`.
//! - The gate is a scheduling convenience only; it holds no query logic.

use std::time::{Duration, Instant};

/// Default quiet period between the last keystroke and a released query.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Debounce gate over query text.
///
/// Callers pass their own `Instant`s, so the gate itself never reads the
/// clock and behaves deterministically under test.
#[derive(Debug)]
pub struct DebounceGate {
    quiet_period: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    value: String,
    submitted_at: Instant,
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl DebounceGate {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Records a new candidate value, replacing any unreleased one and
    /// restarting the quiet period.
    pub fn submit(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            submitted_at: now,
        });
    }

    /// Releases the pending value once the quiet period has elapsed.
    ///
    /// Returns `None` while the gate is idle or still inside the quiet
    /// period. A released value clears the gate.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now.duration_since(p.submitted_at) >= self.quiet_period);
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    /// Releases the pending value immediately, quiet period or not.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    /// Returns whether nothing is waiting to fire.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}
