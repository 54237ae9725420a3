//! # Restaurant notification: the gate-limited call site.
//!
//! [`NotificationService`] pushes order notifications to restaurants through
//! a [`NotifyChannel`], with a [`ConcurrencyGate`] bounding in-flight
//! deliveries. During a rush, excess notifications queue in FIFO order
//! instead of overwhelming the receiving side.
//!
//! This path has **no retry**: the gate throttles, and whatever the channel
//! returns propagates to the caller unchanged after the permit is back.
//! Callers treat notification as fire-and-forget and log failures.
//!
//! The canonical limit (see [`Config`](crate::Config)) is 3 concurrent
//! deliveries, each taking ~2s through the simulated webhook.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time;

use crate::error::NotifyError;
use crate::gate::ConcurrencyGate;
use crate::store::Order;

/// Transport that actually delivers a notification.
///
/// The service is generic over this seam so tests can count or fail
/// deliveries deterministically.
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Delivers one notification, taking as long as the transport takes.
    async fn deliver(&self, order: &Order) -> Result<(), NotifyError>;
}

/// Stand-in for the restaurant's webhook endpoint.
///
/// Sleeps for the configured latency and succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedWebhook {
    latency: Duration,
}

impl SimulatedWebhook {
    /// Creates a webhook stub with the given per-delivery latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl NotifyChannel for SimulatedWebhook {
    async fn deliver(&self, order: &Order) -> Result<(), NotifyError> {
        tracing::info!(order = %order.id, "sending notification to restaurant");
        time::sleep(self.latency).await;
        tracing::info!(order = %order.id, "notification sent");
        Ok(())
    }
}

/// Sends order notifications with bounded concurrency.
pub struct NotificationService {
    gate: Arc<ConcurrencyGate>,
    channel: Arc<dyn NotifyChannel>,
}

impl NotificationService {
    /// Operation name used for the gate and in logs.
    pub const OP: &'static str = "notify-restaurant";

    /// Creates a service allowing at most `limit` concurrent deliveries.
    ///
    /// # Panics
    /// Panics if `limit` is 0 (see [`ConcurrencyGate::new`]).
    pub fn new(limit: usize, channel: Arc<dyn NotifyChannel>) -> Self {
        Self {
            gate: ConcurrencyGate::new(Self::OP, limit),
            channel,
        }
    }

    /// The underlying gate, exposed for snapshots in logs and tests.
    pub fn gate(&self) -> &Arc<ConcurrencyGate> {
        &self.gate
    }

    /// Notifies the restaurant about `order`, queueing behind the gate if
    /// the limit is reached.
    ///
    /// A delivery failure is logged and returned unchanged; the permit is
    /// always released first.
    pub async fn notify_restaurant(&self, order: &Order) -> Result<(), NotifyError> {
        let result = self.gate.run(|| self.channel.deliver(order)).await;
        if let Err(error) = &result {
            tracing::warn!(order = %order.id, error = %error, "notification failed");
        }
        result
    }
}
