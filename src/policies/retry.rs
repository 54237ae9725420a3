//! # Retry policy: attempt budget plus backoff.
//!
//! [`RetryPolicy`] bundles the total attempt budget with the
//! [`BackoffPolicy`] used to space attempts out. It is plain, immutable data:
//! construct it once at startup and share it by copy.
//!
//! ## Semantics
//! - `max_attempts` counts **all** attempts, including the first one.
//!   `max_attempts = 1` therefore means "no retries".
//! - The delay before attempt `n+1` is `backoff.delay_for(n)`; no delay is
//!   ever inserted before the first attempt.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use ordervisor::{BackoffPolicy, JitterPolicy, RetryPolicy};
//!
//! // 1 initial attempt + 3 retries, 1s doubling, uncapped.
//! let policy = RetryPolicy::new(4, BackoffPolicy {
//!     base: Duration::from_secs(1),
//!     factor: 2.0,
//!     max: None,
//!     jitter: JitterPolicy::None,
//! });
//! assert_eq!(policy.max_attempts, 4);
//! ```

use crate::policies::backoff::BackoffPolicy;

/// Immutable retry policy: attempt budget + backoff schedule.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Total attempt budget, including the first attempt (`>= 1`).
    pub max_attempts: u32,
    /// How to space attempts out.
    pub backoff: BackoffPolicy,
}

impl RetryPolicy {
    /// Creates a policy with the given attempt budget and backoff.
    ///
    /// A budget of 0 is clamped to 1: the operation always runs at least once.
    pub fn new(max_attempts: u32, backoff: BackoffPolicy) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Returns a copy with a different backoff.
    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }
}

impl Default for RetryPolicy {
    /// Returns a policy with 3 attempts and the default exponential backoff.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: BackoffPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_clamped_to_one() {
        let policy = RetryPolicy::new(0, BackoffPolicy::default());
        assert_eq!(policy.max_attempts, 1);
    }

    #[test]
    fn test_budget_preserved() {
        let policy = RetryPolicy::new(11, BackoffPolicy::default());
        assert_eq!(policy.max_attempts, 11);
    }
}
