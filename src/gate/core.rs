//! # ConcurrencyGate: bounded admission with FIFO queueing.
//!
//! [`ConcurrencyGate`] bounds how many executions of one operation kind run
//! at the same time. Up to `capacity` callers are admitted immediately;
//! everyone else queues and is resumed strictly in arrival order.
//!
//! ## Architecture
//! ```text
//! acquire()                         release (explicit or permit drop)
//!     │                                 │
//!     ▼                                 ▼
//! ┌─────────────────────────────────────────────────┐
//! │ GateState (one mutex, never held across await)  │
//! │   in_use:  0 ≤ n ≤ capacity                     │
//! │   waiters: VecDeque<oneshot::Sender<()>>  FIFO  │
//! └─────────────────────────────────────────────────┘
//!     │                                 │
//!     ├─ in_use < capacity ─► grant     ├─ pop oldest live waiter ─► hand
//!     │  (in_use += 1)                  │  slot over (in_use unchanged)
//!     └─ otherwise ─► enqueue sender,   └─ no waiters ─► in_use -= 1
//!        await receiver (lock released)
//! ```
//!
//! ## Rules
//! - A freed slot is handed **directly** to the oldest waiter; a late
//!   arriver can never barge in between release and wakeup.
//! - Waiters whose acquiring future was dropped are skipped.
//! - The gate never retries and never classifies: whatever the protected
//!   operation returns propagates to the caller unchanged, after the permit
//!   is back.
//! - `in_use > capacity` is unrepresentable: the counter only grows under
//!   the lock while strictly below capacity.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::oneshot;

use crate::gate::permit::Permit;

/// Internal accounting, protected by one mutex.
#[derive(Debug)]
struct GateState {
    /// Slots currently held. Invariant: `0 <= in_use <= capacity`.
    in_use: usize,
    /// Queued acquire requests, oldest first.
    waiters: VecDeque<oneshot::Sender<()>>,
}

/// Bounds concurrent executions of one operation kind to a fixed capacity,
/// queueing excess callers in FIFO order.
///
/// Construct one gate per operation kind at startup and share it via `Arc`;
/// it lives for the process lifetime.
///
/// # Example
/// ```rust
/// use ordervisor::ConcurrencyGate;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let gate = ConcurrencyGate::new("notify", 3);
///
///     let permit = gate.acquire().await;
///     // ... do the protected work ...
///     permit.release();
///
///     // Or scoped, releasing on every exit path:
///     let sent: Result<(), String> = gate.run(|| async { Ok(()) }).await;
///     assert!(sent.is_ok());
/// }
/// ```
#[derive(Debug)]
pub struct ConcurrencyGate {
    name: Cow<'static, str>,
    capacity: usize,
    state: Mutex<GateState>,
}

impl ConcurrencyGate {
    /// Creates a gate admitting at most `capacity` concurrent executions.
    ///
    /// # Panics
    /// Panics if `capacity` is 0: a gate nobody can pass is a configuration
    /// error, not a runtime condition.
    pub fn new(name: impl Into<Cow<'static, str>>, capacity: usize) -> Arc<Self> {
        assert!(capacity > 0, "gate capacity must be > 0");
        Arc::new(Self {
            name: name.into(),
            capacity,
            state: Mutex::new(GateState {
                in_use: 0,
                waiters: VecDeque::new(),
            }),
        })
    }

    /// Acquires one slot, suspending the calling task while the gate is at
    /// capacity. Waiters are granted slots strictly in arrival order.
    ///
    /// The returned [`Permit`] gives the slot back on [`Permit::release`] or,
    /// failing that, on drop.
    pub async fn acquire(self: &Arc<Self>) -> Permit {
        let rx = {
            let mut state = self.lock_state();
            if state.in_use < self.capacity {
                state.in_use += 1;
                return Permit::new(Arc::clone(self));
            }
            let (tx, rx) = oneshot::channel();
            state.waiters.push_back(tx);
            rx
        };

        // Queued senders live inside the gate state, and we hold an Arc to
        // the gate, so the sender cannot vanish before a release fires it.
        rx.await
            .expect("gate state dropped while a waiter was queued");
        Permit::new(Arc::clone(self))
    }

    /// Scoped acquisition: acquires a slot, runs `op`, and releases the slot
    /// on every exit path, then returns the operation's output unchanged.
    pub async fn run<F, Fut, T>(self: &Arc<Self>, op: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let permit = self.acquire().await;
        let output = op().await;
        permit.release();
        output
    }

    /// Returns one held slot.
    ///
    /// If any live waiter is queued, the slot is handed to the oldest one and
    /// `in_use` stays unchanged (the slot merely changes owner); otherwise
    /// the counter drops.
    pub(super) fn release_slot(&self) {
        let mut state = self.lock_state();
        while let Some(waiter) = state.waiters.pop_front() {
            if waiter.send(()).is_ok() {
                return;
            }
            // Receiver gone: that acquire's future was dropped. Skip it.
        }
        state.in_use = state
            .in_use
            .checked_sub(1)
            .expect("gate accounting underflow: released more slots than acquired");
    }

    /// Gate name, for logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of concurrently held slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently held.
    pub fn in_use(&self) -> usize {
        self.lock_state().in_use
    }

    /// Callers currently queued.
    pub fn waiting(&self) -> usize {
        self.lock_state().waiters.len()
    }

    fn lock_state(&self) -> MutexGuard<'_, GateState> {
        // Poisoning implies a panic inside one of the short critical
        // sections above, i.e. a broken accounting invariant.
        self.state.lock().expect("gate lock poisoned")
    }
}
