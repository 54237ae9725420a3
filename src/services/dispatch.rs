//! # Driver assignment: the resource-acquisition retry call site.
//!
//! [`DriverDispatch`] tries to pick a free driver for an order. Driver
//! availability is simulated through the injected [`FaultPlan`]; when no
//! driver is free the attempt fails with
//! [`DispatchError::NoDriversAvailable`], which is the one retryable failure
//! kind here — the executor keeps trying under its policy while the caller
//! stays suspended.
//!
//! The canonical policy (see [`Config`](crate::Config)) gives the operation
//! 11 attempts (1 initial + 10 retries) with a 2s delay growing ×1.5 up to a
//! 10s cap.
//!
//! ## Flow
//! ```text
//! assign_driver(order)
//!   └─► executor.execute(try_pick)
//!         ├─ order id blank        ─► InvalidOrder (fatal, no retries)
//!         ├─ no free driver        ─► NoDriversAvailable (retry w/ backoff)
//!         └─ driver picked         ─► Ok(driver)
//! ```

use std::sync::Arc;

use rand::Rng;

use crate::error::DispatchError;
use crate::observe::Observe;
use crate::policies::RetryPolicy;
use crate::retry::{RetryExecutor, RetryOutcome};
use crate::services::fault::FaultPlan;
use crate::store::{Driver, Order};

/// Assigns drivers to orders, retrying while none are available.
///
/// Holds a read-only roster injected at construction; the dispatcher never
/// mutates it.
pub struct DriverDispatch {
    roster: Arc<Vec<Driver>>,
    faults: Arc<dyn FaultPlan>,
    executor: RetryExecutor<DispatchError>,
}

impl DriverDispatch {
    /// Operation name used in observer hooks and logs.
    pub const OP: &'static str = "assign-driver";

    /// Creates a dispatcher over `roster`, retrying per `policy`.
    pub fn new(roster: Arc<Vec<Driver>>, faults: Arc<dyn FaultPlan>, policy: RetryPolicy) -> Self {
        Self {
            roster,
            faults,
            executor: RetryExecutor::new(Self::OP, policy).retry_if(DispatchError::is_retryable),
        }
    }

    /// Attaches an observer to the underlying executor.
    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.executor = self.executor.with_observer(observer);
        self
    }

    /// Assigns a driver to `order`.
    ///
    /// Returns the driver on (possibly late) success. On exhaustion the last
    /// [`DispatchError::NoDriversAvailable`] comes back; callers present it
    /// as "temporarily unavailable" rather than leaking retry internals.
    pub async fn assign_driver(&self, order: &Order) -> Result<Driver, DispatchError> {
        tracing::info!(order = %order.id, "assigning driver");

        let outcome = self.executor.execute(|| {
            let result = self.try_pick(order);
            async move { result }
        });

        match outcome.await {
            RetryOutcome::Success { value, attempts } => {
                tracing::info!(
                    order = %order.id,
                    driver = %value.name,
                    attempts,
                    "driver assigned"
                );
                Ok(value)
            }
            RetryOutcome::Exhausted { error, attempts } => {
                tracing::warn!(
                    order = %order.id,
                    attempts,
                    error = %error,
                    "driver assignment gave up"
                );
                Err(error)
            }
        }
    }

    /// One assignment attempt.
    fn try_pick(&self, order: &Order) -> Result<Driver, DispatchError> {
        if order.id.trim().is_empty() {
            return Err(DispatchError::InvalidOrder {
                reason: "blank order id".to_string(),
            });
        }
        if self.faults.should_fail(Self::OP) || self.roster.is_empty() {
            return Err(DispatchError::NoDriversAvailable);
        }

        let picked = rand::rng().random_range(0..self.roster.len());
        Ok(self.roster[picked].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::RetryStats;
    use crate::policies::{BackoffPolicy, JitterPolicy};
    use crate::services::fault::ScriptedFaults;
    use std::time::Duration;

    fn order() -> Order {
        Order::new("order-1", "customer-123", "rest-001", vec![], 25.99, "pay-1")
    }

    fn policy() -> RetryPolicy {
        // Canonical dispatch policy: 1 initial + 10 retries, 2s ×1.5, cap 10s.
        RetryPolicy::new(
            11,
            BackoffPolicy {
                base: Duration::from_millis(2000),
                factor: 1.5,
                max: Some(Duration::from_secs(10)),
                jitter: JitterPolicy::None,
            },
        )
    }

    fn dispatch(script: impl IntoIterator<Item = bool>) -> (DriverDispatch, Arc<RetryStats>) {
        let stats = RetryStats::arc();
        let dispatch = DriverDispatch::new(
            Arc::new(Driver::demo_roster()),
            Arc::new(ScriptedFaults::from_script(script)),
            policy(),
        )
        .with_observer(stats.clone());
        (dispatch, stats)
    }

    #[tokio::test(start_paused = true)]
    async fn test_assigns_after_transient_unavailability() {
        let (dispatch, stats) = dispatch([true, true, false]);

        let driver = dispatch.assign_driver(&order()).await.unwrap();
        assert!(!driver.name.is_empty());
        assert_eq!(stats.snapshot().attempts, 3);
        assert_eq!(stats.snapshot().recoveries, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_full_budget_when_never_available() {
        let (dispatch, stats) = dispatch(std::iter::repeat(true).take(20));

        let err = dispatch.assign_driver(&order()).await.unwrap_err();
        assert_eq!(err, DispatchError::NoDriversAvailable);
        assert_eq!(stats.snapshot().attempts, 11, "1 initial + 10 retries");
        assert_eq!(stats.snapshot().exhausted, 1);
    }

    #[tokio::test]
    async fn test_invalid_order_is_fatal_on_first_attempt() {
        let (dispatch, stats) = dispatch([]);
        let blank = Order::new("  ", "customer-123", "rest-001", vec![], 25.99, "pay-1");

        let err = dispatch.assign_driver(&blank).await.unwrap_err();
        assert!(matches!(err, DispatchError::InvalidOrder { .. }));
        assert_eq!(stats.snapshot().attempts, 1, "fatal error skips the retry budget");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_roster_counts_as_unavailable() {
        let stats = RetryStats::arc();
        let dispatch = DriverDispatch::new(
            Arc::new(Vec::new()),
            Arc::new(ScriptedFaults::none()),
            RetryPolicy::new(2, BackoffPolicy::default()),
        )
        .with_observer(stats.clone());

        let err = dispatch.assign_driver(&order()).await.unwrap_err();
        assert_eq!(err, DispatchError::NoDriversAvailable);
        assert_eq!(stats.snapshot().attempts, 2);
    }
}
