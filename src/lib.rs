//! # ordervisor
//!
//! **Ordervisor** is a food-ordering demo crate built around a small,
//! reusable resilience layer: retry-with-backoff for flaky operations and a
//! FIFO concurrency gate for bounded admission.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌────────────────┐  ┌────────────────┐   ┌─────────────────────┐
//!  │ DriverDispatch │  │  MenuService   │   │ NotificationService │
//!  │ (assign-driver)│  │  (fetch-menu)  │   │ (notify-restaurant) │
//!  └──────┬─────────┘  └──────┬─────────┘   └─────────┬───────────┘
//!         ▼                   ▼                       ▼
//!  ┌─────────────────────────────────────┐   ┌─────────────────────┐
//!  │ RetryExecutor (per call site)       │   │ ConcurrencyGate     │
//!  │  - RetryPolicy (attempts + backoff) │   │  - capacity: 3      │
//!  │  - retryable-error predicate        │   │  - FIFO waiters     │
//!  │  - observers (stats, log, ...)      │   │  - RAII permits     │
//!  └──────────────┬──────────────────────┘   └─────────────────────┘
//!                 │ synchronous hooks
//!                 ▼
//!       Observe: before_attempt / on_backoff / on_success / on_failure
//! ```
//!
//! ### Retry lifecycle
//! ```text
//! executor.execute(op)
//!
//! loop {
//!   ├─► attempt += 1, before_attempt(name, attempt)
//!   ├─► op().await
//!   │     ├─ Ok          ─► on_success ─► Success { value, attempts }
//!   │     ├─ Err fatal   ─► on_failure ─► Exhausted (budget skipped)
//!   │     └─ Err transient:
//!   │          ├─ attempt < max ─► on_backoff ─► sleep ─► continue
//!   │          └─ attempt == max ─► on_failure ─► Exhausted
//! }
//! ```
//!
//! ## Features
//! | Area           | Description                                            | Key types / traits                      |
//! |----------------|--------------------------------------------------------|-----------------------------------------|
//! | **Retry**      | Budgeted retries with exponential backoff and jitter.  | [`RetryExecutor`], [`RetryPolicy`]      |
//! | **Admission**  | Bounded concurrency with FIFO queueing.                | [`ConcurrencyGate`], [`Permit`]         |
//! | **Observers**  | Synchronous lifecycle hooks for metrics/logging.       | [`Observe`], [`RetryStats`], [`RetryLog`] |
//! | **Errors**     | Typed domain errors with retryable/fatal split.        | [`DispatchError`], [`MenuError`]        |
//! | **Call sites** | Demo services driving the resilience layer.            | [`DriverDispatch`], [`MenuService`], [`NotificationService`] |
//! | **Data**       | Read-only reference data loaded once at startup.       | [`Catalog`], [`Driver`], [`Order`]      |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use ordervisor::{
//!     BackoffPolicy, Driver, DriverDispatch, Order, RetryPolicy, RetryStats, ScriptedFaults,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let stats = RetryStats::arc();
//!
//!     // Free driver on the second attempt; quick backoff for the example.
//!     let policy = RetryPolicy::new(3, BackoffPolicy {
//!         base: Duration::from_millis(10),
//!         ..BackoffPolicy::default()
//!     });
//!     let dispatch = DriverDispatch::new(
//!         Arc::new(Driver::demo_roster()),
//!         Arc::new(ScriptedFaults::from_script([true, false])),
//!         policy,
//!     )
//!     .with_observer(stats.clone());
//!
//!     let order = Order::new("order-1", "customer-123", "rest-001", vec![], 25.99, "pay-1");
//!     let driver = dispatch.assign_driver(&order).await.unwrap();
//!     println!("{} takes {} ({} attempts)", driver.name, order.id, stats.snapshot().attempts);
//! }
//! ```

mod config;
mod error;
mod gate;
mod observe;
mod policies;
mod retry;
mod services;
mod store;

// ---- Public re-exports ----

pub use config::Config;
pub use error::{CatalogError, DispatchError, MenuError, NotifyError};
pub use gate::{ConcurrencyGate, Permit};
pub use observe::{Observe, RetryLog, RetryStats, StatsSnapshot};
pub use policies::{BackoffPolicy, JitterPolicy, RetryPolicy};
pub use retry::{AttemptResult, RetryExecutor, RetryOutcome};
pub use services::{
    DriverDispatch, FaultPlan, MenuService, NotificationService, NotifyChannel, RandomFaults,
    ScriptedFaults, SimulatedWebhook,
};
pub use store::{Catalog, Driver, MenuItem, Order, OrderStatus, Restaurant};
