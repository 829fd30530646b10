//! Extension point for deciding whether an entry has gone unused.
//!
//! Scanners that take an inactivity threshold ask a [`StalenessEvaluator`]
//! about each entry. Only [`PlaceholderEvaluator`] ships today; it never
//! reaches a verdict, so scanners fall back to their placeholder reasons.

use std::time::SystemTime;

/// Outcome of a staleness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// Unused for longer than the threshold
    Stale,
    /// Used within the threshold; not a candidate
    Active,
    /// No decision could be made
    Unknown,
}

/// Decides whether an entry counts as inactive
pub trait StalenessEvaluator {
    fn evaluate(&self, last_modified: Option<SystemTime>, threshold_days: u32) -> Staleness;
}

/// Evaluator used until real usage detection exists
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderEvaluator;

impl StalenessEvaluator for PlaceholderEvaluator {
    fn evaluate(&self, _last_modified: Option<SystemTime>, _threshold_days: u32) -> Staleness {
        Staleness::Unknown
    }
}
