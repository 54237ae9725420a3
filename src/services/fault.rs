//! # Injectable fault simulation.
//!
//! The demo services simulate flaky collaborators (driver availability, the
//! partner menu API). Flakiness is a capability, not an ambient coin flip:
//! every service receives a [`FaultPlan`] at construction, so demos can plug
//! in randomness while tests supply exact failure sequences.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

/// Decides, per invocation, whether the simulated collaborator fails.
pub trait FaultPlan: Send + Sync {
    /// Returns `true` when the next invocation of `op` should fail.
    fn should_fail(&self, op: &str) -> bool;
}

/// Random faults at a fixed failure rate.
///
/// This is the demo-mode plan: each invocation independently fails with
/// probability `failure_rate`.
#[derive(Debug, Clone, Copy)]
pub struct RandomFaults {
    failure_rate: f64,
}

impl RandomFaults {
    /// Creates a plan failing each invocation with probability
    /// `failure_rate`, clamped to `[0.0, 1.0]`.
    pub fn new(failure_rate: f64) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl FaultPlan for RandomFaults {
    fn should_fail(&self, _op: &str) -> bool {
        rand::rng().random_bool(self.failure_rate)
    }
}

/// Deterministic fault script, consumed front to back.
///
/// Each `should_fail` call pops the next scripted outcome; once the script
/// runs dry the plan stops injecting faults. This is what tests use to pin
/// down exact attempt counts.
#[derive(Debug, Default)]
pub struct ScriptedFaults {
    script: Mutex<VecDeque<bool>>,
}

impl ScriptedFaults {
    /// Creates a plan that plays back `script` in order (`true` = fail).
    pub fn from_script(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    /// Creates a plan that never injects a fault.
    pub fn none() -> Self {
        Self::default()
    }
}

impl FaultPlan for ScriptedFaults {
    fn should_fail(&self, _op: &str) -> bool {
        self.script
            .lock()
            .expect("fault script lock poisoned")
            .pop_front()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_plays_back_in_order() {
        let plan = ScriptedFaults::from_script([true, false, true]);
        assert!(plan.should_fail("op"));
        assert!(!plan.should_fail("op"));
        assert!(plan.should_fail("op"));
        // Script exhausted: no more faults.
        assert!(!plan.should_fail("op"));
    }

    #[test]
    fn test_random_extremes() {
        let never = RandomFaults::new(0.0);
        let always = RandomFaults::new(1.0);
        for _ in 0..50 {
            assert!(!never.should_fail("op"));
            assert!(always.should_fail("op"));
        }
    }

    #[test]
    fn test_random_rate_is_clamped() {
        // Out-of-range rates must not panic inside the RNG.
        assert!(RandomFaults::new(7.5).should_fail("op"));
        assert!(!RandomFaults::new(-3.0).should_fail("op"));
    }
}
