//! # Process-wide configuration.
//!
//! Provides [`Config`] centralized settings for the demo services. One
//! instance is built at startup and its pieces are handed to the service
//! constructors; nothing reads configuration ambiently.
//!
//! The defaults are the canonical demo values:
//!
//! | Knob                  | Default                                   |
//! |-----------------------|-------------------------------------------|
//! | `dispatch_retry`      | 11 attempts, 2s base, ×1.5, cap 10s       |
//! | `menu_retry`          | 4 attempts, 1s base, ×2.0, **no cap**     |
//! | `notify_limit`        | 3 concurrent deliveries                   |
//! | `notify_latency`      | 2s per simulated delivery                 |
//! | `partner_latency`     | 200ms per simulated partner round-trip    |
//! | `driver_failure_rate` | 0.5 (a free driver turns up half the time)|
//! | `menu_failure_rate`   | 0.4 (flaky partner API)                   |

use std::time::Duration;

use crate::policies::{BackoffPolicy, JitterPolicy, RetryPolicy};

/// Configuration bundle for the demo services.
///
/// All fields are public; build one with `Config::default()` and override
/// what a given demo or test needs.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Retry policy for driver assignment (resource acquisition).
    pub dispatch_retry: RetryPolicy,

    /// Retry policy for the partner menu fetch (external call).
    ///
    /// Deliberately uncapped: with a 4-attempt budget the delays stop at 4s.
    pub menu_retry: RetryPolicy,

    /// Maximum concurrent notification deliveries (> 0).
    pub notify_limit: usize,

    /// Simulated latency of one notification delivery.
    pub notify_latency: Duration,

    /// Simulated latency of one successful partner round-trip.
    pub partner_latency: Duration,

    /// Probability that a driver-assignment attempt finds nobody free.
    pub driver_failure_rate: f64,

    /// Probability that a partner menu call fails transiently.
    pub menu_failure_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dispatch_retry: RetryPolicy::new(
                11,
                BackoffPolicy {
                    base: Duration::from_millis(2000),
                    factor: 1.5,
                    max: Some(Duration::from_secs(10)),
                    jitter: JitterPolicy::None,
                },
            ),
            menu_retry: RetryPolicy::new(
                4,
                BackoffPolicy {
                    base: Duration::from_secs(1),
                    factor: 2.0,
                    max: None,
                    jitter: JitterPolicy::None,
                },
            ),
            notify_limit: 3,
            notify_latency: Duration::from_secs(2),
            partner_latency: Duration::from_millis(200),
            driver_failure_rate: 0.5,
            menu_failure_rate: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_dispatch_policy() {
        let cfg = Config::default();
        assert_eq!(cfg.dispatch_retry.max_attempts, 11);
        assert_eq!(cfg.dispatch_retry.backoff.base, Duration::from_secs(2));
        assert_eq!(cfg.dispatch_retry.backoff.max, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_canonical_menu_policy_has_no_cap() {
        let cfg = Config::default();
        assert_eq!(cfg.menu_retry.max_attempts, 4);
        assert_eq!(cfg.menu_retry.backoff.max, None);
    }

    #[test]
    fn test_menu_delays_without_cap() {
        let cfg = Config::default();
        let backoff = cfg.menu_retry.backoff;
        assert_eq!(backoff.delay_for(1), Duration::from_secs(1));
        assert_eq!(backoff.delay_for(2), Duration::from_secs(2));
        assert_eq!(backoff.delay_for(3), Duration::from_secs(4));
    }
}
