//! # Atomic retry counters.
//!
//! [`RetryStats`] accumulates three process-lifetime counters across all
//! executions it observes:
//!
//! - **attempts** — total attempts made (one per `before_attempt`);
//! - **recoveries** — executions that succeeded after more than one attempt;
//! - **exhausted** — executions that gave up.
//!
//! Counters are plain atomics, safe under concurrent executions. Share one
//! instance across executors to get an aggregate view, or one per executor
//! for per-operation numbers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::observe::observer::Observe;

/// Point-in-time copy of the counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Total attempts made across observed executions.
    pub attempts: u64,
    /// Executions that succeeded after more than one attempt.
    pub recoveries: u64,
    /// Executions that gave up (fatal or budget exhausted).
    pub exhausted: u64,
}

/// Counting observer backed by atomics.
#[derive(Debug, Default)]
pub struct RetryStats {
    attempts: AtomicU64,
    recoveries: AtomicU64,
    exhausted: AtomicU64,
}

impl RetryStats {
    /// Creates a zeroed counter set behind an `Arc`, ready to plug into
    /// one or more executors.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns a point-in-time copy of the counters.
    ///
    /// Each counter is read independently; under concurrent updates the
    /// snapshot is approximate, which is fine for logs and dashboards.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            attempts: self.attempts.load(Ordering::Relaxed),
            recoveries: self.recoveries.load(Ordering::Relaxed),
            exhausted: self.exhausted.load(Ordering::Relaxed),
        }
    }
}

impl Observe for RetryStats {
    fn before_attempt(&self, _op: &str, _attempt: u32) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    fn on_backoff(&self, _op: &str, _attempt: u32, _delay: Duration) {}

    fn on_success(&self, _op: &str, attempts: u32) {
        if attempts > 1 {
            self.recoveries.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn on_failure(&self, _op: &str, _attempts: u32, _error: &str) {
        self.exhausted.fetch_add(1, Ordering::Relaxed);
    }
}
