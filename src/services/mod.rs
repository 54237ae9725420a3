//! # Call-site services.
//!
//! The boundary collaborators that drive the resilience layer:
//! - [`DriverDispatch`] - resource-acquisition retry (driver assignment)
//! - [`MenuService`] - external-call retry (partner menu fetch)
//! - [`NotificationService`] - gate-limited notifications, with the
//!   [`NotifyChannel`] transport seam and the built-in [`SimulatedWebhook`]
//! - [`FaultPlan`] - injectable fault simulation ([`RandomFaults`] for
//!   demos, [`ScriptedFaults`] for tests)
//!
//! Each service owns its executor or gate, constructed once at startup with
//! explicitly injected reference data. Exhausted retries surface to callers
//! as plain domain errors; the retry mechanics stay visible only through
//! observers and logs.

mod dispatch;
mod fault;
mod menu;
mod notify;

pub use dispatch::DriverDispatch;
pub use fault::{FaultPlan, RandomFaults, ScriptedFaults};
pub use menu::MenuService;
pub use notify::{NotificationService, NotifyChannel, SimulatedWebhook};
