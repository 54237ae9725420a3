//! # Demo: lunch_rush
//!
//! Demonstrates the admission gate: 10 order notifications land at once,
//! but only 3 deliveries run concurrently; the other 7 queue in FIFO order
//! and flow through as slots free up.
//!
//! With a 2s simulated delivery, the rush completes in ~8s
//! (ceil(10 / 3) × 2s) instead of the 2s an unbounded fan-out would take —
//! that is the queueing, visible.
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example lunch_rush
//! ```

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;

use ordervisor::{Config, NotificationService, Order, SimulatedWebhook};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Capacity-3 gate in front of a 2s simulated webhook.
    let cfg = Config::default();
    let service = NotificationService::new(
        cfg.notify_limit,
        Arc::new(SimulatedWebhook::new(cfg.notify_latency)),
    );

    // 2. The lunch rush: 10 confirmed orders at once.
    let orders: Vec<Order> = (1..=10)
        .map(|i| {
            Order::new(
                format!("lunch-{i:04}"),
                format!("customer-{i}"),
                "rest-002",
                vec!["item-005".into(), "item-006".into()],
                15.99,
                format!("payment-{i}"),
            )
        })
        .collect();

    println!(
        "notifying {} orders through a capacity-{} gate...",
        orders.len(),
        service.gate().capacity()
    );

    // 3. Fire them all; failures are logged by the service, not retried.
    let started = Instant::now();
    let results = join_all(
        orders
            .iter()
            .map(|order| service.notify_restaurant(order)),
    )
    .await;

    let sent = results.iter().filter(|r| r.is_ok()).count();
    println!(
        "lunch rush done: {sent}/{} sent in {:.1}s (expected ~{:.0}s)",
        results.len(),
        started.elapsed().as_secs_f64(),
        (results.len() as f64 / service.gate().capacity() as f64).ceil()
            * cfg.notify_latency.as_secs_f64(),
    );
}
