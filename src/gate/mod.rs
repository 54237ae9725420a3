//! # Concurrency-limiting admission gate.
//!
//! This module provides the admission half of the resilience layer:
//! - [`ConcurrencyGate`] - bounds concurrent executions of one operation
//!   kind, queueing excess callers in FIFO order
//! - [`Permit`] - one held slot, released explicitly or on drop
//!
//! The gate is retry-agnostic: it throttles, it never classifies errors or
//! re-runs anything.

mod core;
mod permit;

pub use self::core::ConcurrencyGate;
pub use permit::Permit;
