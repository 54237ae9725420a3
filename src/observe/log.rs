//! # Logging observer.
//!
//! [`RetryLog`] emits one `tracing` statement per retry lifecycle event.
//! Attempt starts are `debug`, scheduled backoffs are `info`, recoveries are
//! `info`, terminal failures are `warn`.
//!
//! ## Output shape
//! ```text
//! DEBUG retry: attempt starting op="assign-driver" attempt=2
//!  INFO retry: backoff scheduled op="assign-driver" attempt=2 delay_ms=3000
//!  INFO retry: succeeded after retries op="assign-driver" attempts=3
//!  WARN retry: gave up op="fetch-menu" attempts=4 error="partner api unavailable"
//! ```

use std::time::Duration;

use crate::observe::observer::Observe;

/// Tracing-backed retry logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct RetryLog;

impl Observe for RetryLog {
    fn before_attempt(&self, op: &str, attempt: u32) {
        tracing::debug!(target: "retry", op, attempt, "attempt starting");
    }

    fn on_backoff(&self, op: &str, attempt: u32, delay: Duration) {
        tracing::info!(
            target: "retry",
            op,
            attempt,
            delay_ms = delay.as_millis() as u64,
            "backoff scheduled"
        );
    }

    fn on_success(&self, op: &str, attempts: u32) {
        if attempts > 1 {
            tracing::info!(target: "retry", op, attempts, "succeeded after retries");
        } else {
            tracing::debug!(target: "retry", op, "succeeded on first attempt");
        }
    }

    fn on_failure(&self, op: &str, attempts: u32, error: &str) {
        tracing::warn!(target: "retry", op, attempts, error, "gave up");
    }
}
