//! Retry and backoff policies.
//!
//! This module groups the knobs that control **how many** attempts an
//! operation gets and **how long** to wait between them.
//!
//! ## Contents
//! - [`RetryPolicy`]   total attempt budget + backoff schedule
//! - [`BackoffPolicy`] how retry delays evolve (base / factor / optional cap + jitter)
//! - [`JitterPolicy`]  randomization strategy to avoid thundering herd
//!
//! ## Quick wiring
//! ```text
//! RetryExecutor { policy: RetryPolicy, .. }
//!      └─► after failed attempt n:
//!           - if n < policy.max_attempts: sleep(backoff.delay_for(n)), retry
//!           - else: give up with the last error
//! ```
//!
//! ## Defaults
//! - `RetryPolicy::default()` → 3 attempts.
//! - `BackoffPolicy::default()` → base=100ms, factor=2.0, max=30s, jitter=None.
//! - `JitterPolicy::None` by default; consider `Equal` when many callers
//!   retry against the same resource.

mod backoff;
mod jitter;
mod retry;

pub use backoff::BackoffPolicy;
pub use jitter::JitterPolicy;
pub use retry::RetryPolicy;
