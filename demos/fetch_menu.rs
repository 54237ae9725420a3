//! # Demo: fetch_menu
//!
//! Demonstrates the external-call retry: the partner menu API fails ~40% of
//! the time, and [`MenuService`] retries under the canonical policy
//! (4 attempts, 1s delay doubling each retry, no cap).
//!
//! The second fetch asks for a restaurant that does not exist: the partner
//! reports it as an upstream "not found", which is retryable, so the whole
//! budget burns before the caller sees the failure.
//!
//! ## Run
//! ```bash
//! RUST_LOG=info,retry=debug cargo run --example fetch_menu
//! ```

use std::sync::Arc;

use ordervisor::{Catalog, Config, MenuService, RandomFaults, RetryLog, RetryStats};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Load the read-only reference data once.
    let catalog = Arc::new(Catalog::load_from_dir("data")?);

    // 2. Build the menu service with the canonical flaky-partner setup.
    let cfg = Config::default();
    let stats = RetryStats::arc();
    let menu = MenuService::new(
        catalog,
        Arc::new(RandomFaults::new(cfg.menu_failure_rate)),
        cfg.menu_retry,
        cfg.partner_latency,
    )
    .with_observer(Arc::new(RetryLog))
    .with_observer(stats.clone());

    // 3. A real restaurant: succeeds, possibly after retries.
    match menu.fetch_menu("rest-001").await {
        Ok(items) => {
            println!("menu for rest-001 ({} items):", items.len());
            for item in items {
                println!("  {} — {:.2} ({})", item.name, item.price, item.category);
            }
        }
        Err(err) => println!("menu temporarily unavailable: {err}"),
    }

    // 4. An unknown restaurant: retried as an upstream failure, then gives up.
    if let Err(err) = menu.fetch_menu("rest-404").await {
        println!("rest-404: {err}");
    }

    let snapshot = stats.snapshot();
    println!(
        "stats: attempts={} recoveries={} exhausted={}",
        snapshot.attempts, snapshot.recoveries, snapshot.exhausted
    );
    Ok(())
}
