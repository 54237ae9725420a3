//! # Retry observability.
//!
//! This module provides the observer capability for retry executions:
//! - [`Observe`] - trait with synchronous lifecycle hooks
//! - [`RetryStats`] - atomic counters (attempts / recoveries / exhausted)
//! - [`RetryLog`] - tracing-backed logging observer
//!
//! Observers are attached to a
//! [`RetryExecutor`](crate::RetryExecutor) at construction time and notified
//! in registration order. They watch; they never steer.

mod log;
mod observer;
mod stats;

pub use log::RetryLog;
pub use observer::Observe;
pub use stats::{RetryStats, StatsSnapshot};
