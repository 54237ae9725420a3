//! # RetryExecutor: the retry loop.
//!
//! Wraps a fallible async operation and retries it under a [`RetryPolicy`],
//! classifying each failure through a retryable-error predicate and
//! reporting lifecycle hooks to [`Observe`] implementations.
//!
//! ## Flow
//! ```text
//! execute(operation)
//!
//! loop {
//!   ├─► attempt += 1
//!   ├─► observers.before_attempt(name, attempt)
//!   ├─► operation().await
//!   │       │
//!   │       ├─ Ok(v)            ─► observers.on_success ─► Success { v, attempts }
//!   │       ├─ Err, fatal       ─► observers.on_failure ─► Exhausted (budget skipped)
//!   │       └─ Err, retryable:
//!   │            ├─ attempt < max ─► delay = backoff.delay_for(attempt)
//!   │            │                   observers.on_backoff ─► sleep(delay) ─► continue
//!   │            └─ attempt == max ─► observers.on_failure ─► Exhausted
//! }
//! ```
//!
//! ## Rules
//! - Attempts run **sequentially**; the backoff sleep suspends only the
//!   calling task.
//! - Exactly one `before_attempt` per attempt; exactly one terminal
//!   `on_success` or `on_failure` per execution, in that relative order.
//! - Observer calls are synchronous and never affect control flow.
//! - The attempt counter is an explicit per-call value; executions share no
//!   mutable state, so any number may run concurrently.
//! - The caller only ever sees the terminal [`RetryOutcome`]; intermediate
//!   retryable failures surface through observers only.

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::time;

use crate::observe::Observe;
use crate::policies::RetryPolicy;
use crate::retry::outcome::{AttemptResult, RetryOutcome};

/// Retries an async operation under a policy, notifying observers.
///
/// Constructed once at startup per call site and shared for the process
/// lifetime. Bundles:
/// - an operation name (appears in every observer hook),
/// - the [`RetryPolicy`] (attempt budget + backoff),
/// - the retryable-error predicate (which failures earn another attempt),
/// - an ordered list of observers.
///
/// # Example
/// ```rust
/// use ordervisor::{RetryExecutor, RetryOutcome, RetryPolicy};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let exec: RetryExecutor<String> =
///         RetryExecutor::new("demo", RetryPolicy::default()).retry_if(|_| false);
///
///     let outcome = exec.execute(|| async { Ok::<_, String>(42) }).await;
///     assert!(matches!(outcome, RetryOutcome::Success { value: 42, attempts: 1 }));
/// }
/// ```
pub struct RetryExecutor<E> {
    name: Cow<'static, str>,
    policy: RetryPolicy,
    retryable: Arc<dyn Fn(&E) -> bool + Send + Sync>,
    observers: Vec<Arc<dyn Observe>>,
}

impl<E> fmt::Debug for RetryExecutor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryExecutor")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<E> RetryExecutor<E>
where
    E: fmt::Display,
{
    /// Creates an executor with the given operation name and policy.
    ///
    /// Every failure is considered retryable until [`retry_if`](Self::retry_if)
    /// installs a predicate.
    pub fn new(name: impl Into<Cow<'static, str>>, policy: RetryPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            retryable: Arc::new(|_| true),
            observers: Vec::new(),
        }
    }

    /// Installs the retryable-error predicate.
    ///
    /// Errors for which the predicate returns `false` are fatal: they end the
    /// execution immediately, regardless of remaining attempt budget.
    pub fn retry_if(mut self, pred: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        self.retryable = Arc::new(pred);
        self
    }

    /// Appends an observer. Observers are notified in registration order.
    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Returns the operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the policy.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Runs `operation` until it succeeds, fails fatally, or the attempt
    /// budget is exhausted.
    ///
    /// The closure is invoked once per attempt and must produce a fresh
    /// future each time.
    pub async fn execute<T, F, Fut>(&self, mut operation: F) -> RetryOutcome<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let max = self.policy.max_attempts;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            self.notify(|o| o.before_attempt(&self.name, attempt));

            match self.classify(operation().await) {
                AttemptResult::Success(value) => {
                    self.notify(|o| o.on_success(&self.name, attempt));
                    return RetryOutcome::Success {
                        value,
                        attempts: attempt,
                    };
                }
                AttemptResult::Fatal(error) => {
                    let rendered = error.to_string();
                    self.notify(|o| o.on_failure(&self.name, attempt, &rendered));
                    return RetryOutcome::Exhausted {
                        error,
                        attempts: attempt,
                    };
                }
                AttemptResult::Retryable(error) => {
                    if attempt >= max {
                        let rendered = error.to_string();
                        self.notify(|o| o.on_failure(&self.name, attempt, &rendered));
                        return RetryOutcome::Exhausted {
                            error,
                            attempts: attempt,
                        };
                    }
                    let delay = self.policy.backoff.delay_for(attempt);
                    self.notify(|o| o.on_backoff(&self.name, attempt, delay));
                    time::sleep(delay).await;
                }
            }
        }
    }

    /// Classifies a raw attempt result through the retryable predicate.
    fn classify<T>(&self, result: Result<T, E>) -> AttemptResult<T, E> {
        match result {
            Ok(value) => AttemptResult::Success(value),
            Err(e) if (self.retryable)(&e) => AttemptResult::Retryable(e),
            Err(e) => AttemptResult::Fatal(e),
        }
    }

    fn notify(&self, f: impl Fn(&dyn Observe)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{BackoffPolicy, JitterPolicy};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Soft,
        Hard,
    }

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                TestError::Soft => write!(f, "transient failure"),
                TestError::Hard => write!(f, "fatal failure"),
            }
        }
    }

    /// Records the raw observer event stream for ordering assertions.
    #[derive(Default)]
    struct Recording {
        events: Mutex<Vec<String>>,
        delays: Mutex<Vec<Duration>>,
    }

    impl Observe for Recording {
        fn before_attempt(&self, op: &str, attempt: u32) {
            self.events.lock().unwrap().push(format!("before:{op}:{attempt}"));
        }
        fn on_backoff(&self, _op: &str, _attempt: u32, delay: Duration) {
            self.delays.lock().unwrap().push(delay);
        }
        fn on_success(&self, op: &str, attempts: u32) {
            self.events.lock().unwrap().push(format!("success:{op}:{attempts}"));
        }
        fn on_failure(&self, op: &str, attempts: u32, _error: &str) {
            self.events.lock().unwrap().push(format!("failure:{op}:{attempts}"));
        }
    }

    fn policy(max_attempts: u32, base_ms: u64, factor: f64, cap: Option<Duration>) -> RetryPolicy {
        RetryPolicy::new(
            max_attempts,
            BackoffPolicy {
                base: Duration::from_millis(base_ms),
                factor,
                max: cap,
                jitter: JitterPolicy::None,
            },
        )
    }

    fn executor(p: RetryPolicy, rec: Arc<Recording>) -> RetryExecutor<TestError> {
        RetryExecutor::new("op", p)
            .retry_if(|e| matches!(e, TestError::Soft))
            .with_observer(rec)
    }

    /// Operation that fails softly until `succeed_on`, then returns the
    /// attempt number.
    fn flaky(
        calls: Arc<AtomicU32>,
        succeed_on: u32,
    ) -> impl FnMut() -> std::pin::Pin<Box<dyn Future<Output = Result<u32, TestError>> + Send>> {
        move || {
            let calls = calls.clone();
            Box::pin(async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n < succeed_on {
                    Err(TestError::Soft)
                } else {
                    Ok(n)
                }
            })
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let rec = Arc::new(Recording::default());
        let exec = executor(policy(5, 100, 2.0, None), rec.clone());

        let outcome = exec.execute(|| async { Ok::<_, TestError>(7) }).await;

        assert!(matches!(outcome, RetryOutcome::Success { value: 7, attempts: 1 }));
        assert_eq!(
            *rec.events.lock().unwrap(),
            vec!["before:op:1", "success:op:1"]
        );
        assert!(rec.delays.lock().unwrap().is_empty(), "no delay before attempt 1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_with_expected_delay_sequence() {
        // 3-attempt policy, 100ms base doubling, 1s cap;
        // fails on attempts 1-2, succeeds on 3.
        let rec = Arc::new(Recording::default());
        let exec = executor(policy(3, 100, 2.0, Some(Duration::from_secs(1))), rec.clone());
        let calls = Arc::new(AtomicU32::new(0));

        let outcome = exec.execute(flaky(calls.clone(), 3)).await;

        assert!(matches!(outcome, RetryOutcome::Success { value: 3, attempts: 3 }));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(
            *rec.delays.lock().unwrap(),
            vec![Duration::from_millis(100), Duration::from_millis(200)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_budget_on_persistent_retryable_failure() {
        let rec = Arc::new(Recording::default());
        let exec = executor(policy(4, 10, 2.0, None), rec.clone());
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let outcome = exec
            .execute(move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Err::<u32, _>(TestError::Soft) }
            })
            .await;

        match outcome {
            RetryOutcome::Exhausted { error, attempts } => {
                assert_eq!(error, TestError::Soft);
                assert_eq!(attempts, 4);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 4, "exactly max_attempts attempts");
        // One backoff per non-final failed attempt.
        assert_eq!(rec.delays.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_fatal_failure_short_circuits() {
        let rec = Arc::new(Recording::default());
        let exec = executor(policy(5, 10, 2.0, None), rec.clone());
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let outcome = exec
            .execute(move || {
                let c = c.clone();
                async move {
                    let n = c.fetch_add(1, Ordering::SeqCst) + 1;
                    if n == 1 {
                        Err::<u32, _>(TestError::Soft)
                    } else {
                        Err(TestError::Hard)
                    }
                }
            })
            .await;

        match outcome {
            RetryOutcome::Exhausted { error, attempts } => {
                assert_eq!(error, TestError::Hard);
                assert_eq!(attempts, 2, "fatal error ends execution at attempt 2");
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            *rec.events.lock().unwrap(),
            vec!["before:op:1", "before:op:2", "failure:op:2"]
        );
    }

    #[tokio::test]
    async fn test_single_attempt_budget_means_no_retries() {
        let rec = Arc::new(Recording::default());
        let exec = executor(policy(1, 100, 2.0, None), rec.clone());
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let outcome = exec
            .execute(move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Err::<u32, _>(TestError::Soft) }
            })
            .await;

        assert_eq!(outcome.attempts(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "operation invoked exactly once");
        assert!(rec.delays.lock().unwrap().is_empty(), "no delay computed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_terminal_attempt_count_matches_before_attempt_calls() {
        let rec = Arc::new(Recording::default());
        let exec = executor(policy(6, 1, 1.0, None), rec.clone());
        let calls = Arc::new(AtomicU32::new(0));

        let outcome = exec.execute(flaky(calls, 4)).await;

        let events = rec.events.lock().unwrap();
        let befores = events.iter().filter(|e| e.starts_with("before:")).count();
        assert_eq!(befores as u32, outcome.attempts());
        assert_eq!(events.last().unwrap(), &format!("success:op:{}", outcome.attempts()));
    }
}
