//! # Menu fetch: the external-call retry call site.
//!
//! [`MenuService`] fetches a restaurant's menu "from the partner API" — in
//! this demo, a catalog lookup behind a simulated flaky upstream. Every
//! upstream problem, including an unknown restaurant, surfaces as
//! [`MenuError::Upstream`] and is retryable; only a malformed identifier is
//! fatal.
//!
//! The canonical policy (see [`Config`](crate::Config)) gives the operation
//! 4 attempts with a 1s delay doubling each retry and **no cap** — with only
//! 3 retries the delays stay at 1s, 2s, 4s, so the absent cap never bites.
//!
//! ## Flow
//! ```text
//! fetch_menu(restaurant_id)
//!   └─► executor.execute(try_fetch)
//!         ├─ id blank              ─► InvalidRestaurantId (fatal)
//!         ├─ upstream flaky        ─► Upstream (retry w/ backoff)
//!         ├─ restaurant unknown    ─► Upstream "not found" (retry w/ backoff)
//!         └─ ok ─► ~200ms partner latency ─► available items only
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use crate::error::MenuError;
use crate::observe::Observe;
use crate::policies::RetryPolicy;
use crate::retry::{RetryExecutor, RetryOutcome};
use crate::services::fault::FaultPlan;
use crate::store::{Catalog, MenuItem};

/// Fetches partner menus, retrying through simulated upstream flakiness.
pub struct MenuService {
    catalog: Arc<Catalog>,
    faults: Arc<dyn FaultPlan>,
    partner_latency: Duration,
    executor: RetryExecutor<MenuError>,
}

impl MenuService {
    /// Operation name used in observer hooks and logs.
    pub const OP: &'static str = "fetch-menu";

    /// Creates a menu service over `catalog`, retrying per `policy`.
    ///
    /// `partner_latency` is the simulated round-trip added on the success
    /// path (the canonical demo value is 200ms).
    pub fn new(
        catalog: Arc<Catalog>,
        faults: Arc<dyn FaultPlan>,
        policy: RetryPolicy,
        partner_latency: Duration,
    ) -> Self {
        Self {
            catalog,
            faults,
            partner_latency,
            executor: RetryExecutor::new(Self::OP, policy).retry_if(MenuError::is_retryable),
        }
    }

    /// Attaches an observer to the underlying executor.
    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.executor = self.executor.with_observer(observer);
        self
    }

    /// Fetches the available menu items of `restaurant_id`.
    ///
    /// On exhaustion the last [`MenuError::Upstream`] comes back; callers
    /// present it as "service temporarily unavailable".
    pub async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, MenuError> {
        tracing::info!(restaurant = restaurant_id, "fetching menu from partner");

        let outcome = self.executor.execute(|| self.try_fetch(restaurant_id)).await;

        match outcome {
            RetryOutcome::Success { value, attempts } => {
                tracing::info!(
                    restaurant = restaurant_id,
                    items = value.len(),
                    attempts,
                    "menu fetched"
                );
                Ok(value)
            }
            RetryOutcome::Exhausted { error, attempts } => {
                tracing::warn!(
                    restaurant = restaurant_id,
                    attempts,
                    error = %error,
                    "menu fetch gave up"
                );
                Err(error)
            }
        }
    }

    /// One partner-API call.
    async fn try_fetch(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, MenuError> {
        if restaurant_id.trim().is_empty() {
            return Err(MenuError::InvalidRestaurantId {
                id: restaurant_id.to_string(),
            });
        }
        if self.faults.should_fail(Self::OP) {
            return Err(MenuError::Upstream {
                reason: "partner restaurant api is temporarily unavailable".to_string(),
            });
        }

        // Simulated partner round-trip.
        time::sleep(self.partner_latency).await;

        let restaurant = self.catalog.restaurant(restaurant_id).ok_or_else(|| {
            MenuError::Upstream {
                reason: format!("restaurant not found: {restaurant_id}"),
            }
        })?;

        Ok(restaurant
            .menu_item_ids
            .iter()
            .filter_map(|id| self.catalog.menu_item(id))
            .filter(|item| item.available)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::RetryStats;
    use crate::policies::{BackoffPolicy, JitterPolicy};
    use crate::services::fault::ScriptedFaults;
    use crate::store::Restaurant;

    fn catalog() -> Arc<Catalog> {
        let restaurant = Restaurant {
            id: "rest-001".to_string(),
            name: "Pasta Palace".to_string(),
            cuisine: "Italian".to_string(),
            rating: 4.6,
            address: "12 Noodle Way".to_string(),
            menu_item_ids: vec!["item-1".to_string(), "item-2".to_string(), "item-3".to_string()],
        };
        let item = |id: &str, available: bool| MenuItem {
            id: id.to_string(),
            restaurant_id: "rest-001".to_string(),
            name: format!("Item {id}"),
            description: String::new(),
            price: 11.0,
            category: "Mains".to_string(),
            available,
        };
        Arc::new(Catalog::from_parts(
            vec![restaurant],
            vec![item("item-1", true), item("item-2", false), item("item-3", true)],
        ))
    }

    fn policy() -> RetryPolicy {
        // Canonical menu policy: 4 attempts, 1s doubling, uncapped.
        RetryPolicy::new(
            4,
            BackoffPolicy {
                base: Duration::from_secs(1),
                factor: 2.0,
                max: None,
                jitter: JitterPolicy::None,
            },
        )
    }

    fn service(script: impl IntoIterator<Item = bool>) -> (MenuService, Arc<RetryStats>) {
        let stats = RetryStats::arc();
        let service = MenuService::new(
            catalog(),
            Arc::new(ScriptedFaults::from_script(script)),
            policy(),
            Duration::from_millis(200),
        )
        .with_observer(stats.clone());
        (service, stats)
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_only_available_items() {
        let (service, _) = service([]);
        let menu = service.fetch_menu("rest-001").await.unwrap();

        let ids: Vec<_> = menu.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["item-1", "item-3"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_from_flaky_upstream() {
        let (service, stats) = service([true, true, false]);
        let menu = service.fetch_menu("rest-001").await.unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(stats.snapshot().attempts, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_restaurant_is_retried_then_exhausted() {
        // "Not found" is an upstream condition here, so the executor burns
        // the whole 4-attempt budget before giving up.
        let (service, stats) = service([]);

        let err = service.fetch_menu("rest-404").await.unwrap_err();
        assert!(matches!(err, MenuError::Upstream { .. }));
        assert_eq!(stats.snapshot().attempts, 4);
        assert_eq!(stats.snapshot().exhausted, 1);
    }

    #[tokio::test]
    async fn test_blank_id_is_fatal() {
        let (service, stats) = service([]);

        let err = service.fetch_menu("  ").await.unwrap_err();
        assert!(matches!(err, MenuError::InvalidRestaurantId { .. }));
        assert_eq!(stats.snapshot().attempts, 1);
    }
}
