//! # Backoff policy for retry delays.
//!
//! [`BackoffPolicy`] controls how the delay before the next attempt grows
//! after repeated failures. It is parameterized by:
//! - [`BackoffPolicy::base`] the delay after the first failed attempt;
//! - [`BackoffPolicy::factor`] the multiplicative growth factor;
//! - [`BackoffPolicy::max`] an optional delay cap.
//!
//! The delay after completed attempt `n` (1-based) is
//! `base × factor^(n-1)`, saturated at `max` when a cap is configured,
//! then jitter is applied. The base delay is derived purely from the attempt
//! number, so jitter output never feeds back into subsequent calculations.
//!
//! `max = None` means the growth is uncapped. With a small attempt budget the
//! computed delays stay small anyway; pathological inputs (huge attempt
//! numbers, non-finite intermediates) still saturate instead of overflowing.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use ordervisor::{BackoffPolicy, JitterPolicy};
//!
//! let backoff = BackoffPolicy {
//!     base: Duration::from_millis(100),
//!     factor: 2.0,
//!     max: Some(Duration::from_secs(1)),
//!     jitter: JitterPolicy::None,
//! };
//!
//! // After attempt 1 — base delay.
//! assert_eq!(backoff.delay_for(1), Duration::from_millis(100));
//!
//! // After attempt 2 — base × factor.
//! assert_eq!(backoff.delay_for(2), Duration::from_millis(200));
//!
//! // After attempt 10 — 100ms × 2^9 = 51_200ms → capped at 1s.
//! assert_eq!(backoff.delay_for(10), Duration::from_secs(1));
//! ```

use std::time::Duration;

use crate::policies::jitter::JitterPolicy;

/// Retry backoff policy.
///
/// Encapsulates parameters that determine how retry delays grow:
/// - [`BackoffPolicy::base`] — delay after the first failed attempt;
/// - [`BackoffPolicy::factor`] — multiplicative growth factor;
/// - [`BackoffPolicy::max`] — optional delay cap (`None` = uncapped).
#[derive(Clone, Copy, Debug)]
pub struct BackoffPolicy {
    /// Delay after the first failed attempt.
    pub base: Duration,
    /// Multiplicative growth factor (`>= 1.0` recommended).
    pub factor: f64,
    /// Maximum delay cap. `None` leaves the growth uncapped.
    pub max: Option<Duration>,
    /// Jitter policy to prevent thundering herd.
    pub jitter: JitterPolicy,
}

impl Default for BackoffPolicy {
    /// Returns a policy with:
    /// - `base = 100ms`;
    /// - `factor = 2.0` (exponential);
    /// - `max = 30s`;
    /// - no jitter.
    fn default() -> Self {
        Self {
            base: Duration::from_millis(100),
            factor: 2.0,
            max: Some(Duration::from_secs(30)),
            jitter: JitterPolicy::None,
        }
    }
}

impl BackoffPolicy {
    /// Computes the delay to wait after completed attempt `attempt` (1-based).
    ///
    /// The raw delay is `base × factor^(attempt-1)`, saturated at
    /// [`BackoffPolicy::max`] when set. Jitter is applied to the saturated
    /// value; the result is never fed back into subsequent calculations.
    ///
    /// # Notes
    /// - `factor = 1.0` yields a constant delay of `base`.
    /// - Attempt numbers below 1 are treated as 1.
    /// - Non-finite or out-of-range intermediates saturate at the cap
    ///   (or `Duration::MAX` when uncapped); this method never panics.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let raw = self.base.as_secs_f64() * self.factor.powi(exp);

        let ceiling = self.max.unwrap_or(Duration::MAX);
        let saturated = if !raw.is_finite() || raw < 0.0 {
            ceiling
        } else {
            match Duration::try_from_secs_f64(raw) {
                Ok(d) => d.min(ceiling),
                Err(_) => ceiling,
            }
        };

        self.jitter.apply(saturated)
    }
}
