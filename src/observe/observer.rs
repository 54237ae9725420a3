//! # Retry lifecycle observer trait.
//!
//! Provides [`Observe`] an extension point for watching retry executions
//! (logging, metrics, test assertions) without touching control flow.
//!
//! ## Rules
//! - Hooks are called **synchronously** from the executing task, so their
//!   relative order is exact: one `before_attempt` per attempt, then either
//!   `on_backoff` (a retry is scheduled) or a terminal `on_success` /
//!   `on_failure`.
//! - Exactly one terminal hook fires per execution.
//! - Observers never affect control flow; keep hooks cheap and non-blocking.
//! - Executions may run concurrently, so shared observer state must be safe
//!   under concurrent updates (atomics or a lock).
//!
//! ## Example
//! ```rust
//! use ordervisor::Observe;
//!
//! struct Alerts;
//!
//! impl Observe for Alerts {
//!     fn on_failure(&self, op: &str, attempts: u32, error: &str) {
//!         eprintln!("{op} gave up after {attempts} attempt(s): {error}");
//!     }
//! }
//! ```

use std::time::Duration;

/// Observer of retry execution lifecycle events.
///
/// All hooks default to no-ops; implement only what you need.
pub trait Observe: Send + Sync {
    /// Called before each attempt, with the 1-based attempt number.
    fn before_attempt(&self, op: &str, attempt: u32) {
        let _ = (op, attempt);
    }

    /// Called when a retry has been scheduled after failed attempt
    /// `attempt`, with the computed backoff delay.
    fn on_backoff(&self, op: &str, attempt: u32, delay: Duration) {
        let _ = (op, attempt, delay);
    }

    /// Called once when the execution succeeds; `attempts` equals the number
    /// of `before_attempt` calls made for this execution.
    fn on_success(&self, op: &str, attempts: u32) {
        let _ = (op, attempts);
    }

    /// Called once when the execution gives up (fatal failure or exhausted
    /// budget), with the rendered last error.
    fn on_failure(&self, op: &str, attempts: u32, error: &str) {
        let _ = (op, attempts, error);
    }
}
