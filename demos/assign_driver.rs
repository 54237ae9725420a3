//! # Demo: assign_driver
//!
//! Demonstrates the resource-acquisition retry: driver availability is a
//! coin flip, and [`DriverDispatch`] keeps trying under the canonical
//! policy (11 attempts, 2s base delay growing ×1.5, capped at 10s).
//!
//! ## Flow
//! ```text
//! dispatch.assign_driver(order)
//!   ├─► attempt 1 ─ no driver free ─► backoff 2s
//!   ├─► attempt 2 ─ no driver free ─► backoff 3s
//!   ├─► attempt 3 ─ driver found   ─► Ok(driver)
//!   └─► stats: attempts=3 recoveries=1
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=info,retry=debug cargo run --example assign_driver
//! ```

use std::sync::Arc;

use ordervisor::{Config, Driver, DriverDispatch, Order, RandomFaults, RetryLog, RetryStats};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Canonical configuration: half the attempts find nobody free.
    let cfg = Config::default();
    let stats = RetryStats::arc();

    // 2. Build the dispatcher over the built-in roster.
    let dispatch = DriverDispatch::new(
        Arc::new(Driver::demo_roster()),
        Arc::new(RandomFaults::new(cfg.driver_failure_rate)),
        cfg.dispatch_retry,
    )
    .with_observer(Arc::new(RetryLog))
    .with_observer(stats.clone());

    // 3. Place an order and watch the retries in the logs.
    let order = Order::new(
        "order-0001",
        "customer-123",
        "rest-001",
        vec!["item-001".into(), "item-002".into()],
        25.99,
        "payment-123",
    );

    match dispatch.assign_driver(&order).await {
        Ok(driver) => println!(
            "driver {} (rating {}) assigned to {}",
            driver.name, driver.rating, order.id
        ),
        Err(err) => println!("no drivers available for {}: {err}", order.id),
    }

    let snapshot = stats.snapshot();
    println!(
        "stats: attempts={} recoveries={} exhausted={}",
        snapshot.attempts, snapshot.recoveries, snapshot.exhausted
    );
}
