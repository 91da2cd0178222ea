use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::timeout;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, instrument, warn};

pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_WAIT: Duration = Duration::from_millis(500);
pub const GEOCODING_WAIT: Duration = Duration::from_secs(2);

/// Errors that a [`RetryPolicy`] knows how to classify.
pub trait Retryable {
    /// Whether another attempt may succeed. Semantic outcomes such as "not found" are never transient.
    fn is_transient(&self) -> bool;

    /// The error reported when the whole retry loop runs past its deadline.
    fn deadline_exceeded(deadline: Duration) -> Self;
}

/// Bounded retry with a fixed wait between attempts and an optional overall deadline.
///
/// Dropping the future returned by [`RetryPolicy::run`] cancels the pending attempt or wait.
#[derive(Clone, PartialEq, Debug)]
pub struct RetryPolicy {
    max_attempts: usize,
    wait: Duration,
    deadline: Option<Duration>,
}

impl RetryPolicy {
    pub fn new(max_attempts: usize, wait: Duration) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            wait,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Runs `operation` until it succeeds, fails with a non-transient error or runs out of attempts.
    /// The last error is returned unchanged.
    #[instrument(skip(self, operation))]
    pub async fn run<T, E, F, Fut>(&self, operation_name: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + Display,
    {
        let attempt = AtomicUsize::new(0);
        let attempt = &attempt;
        let max_attempts = self.max_attempts;

        let strategy = FixedInterval::new(self.wait).take(max_attempts - 1);
        let action = || {
            let current = attempt.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("🔁 Attempt {}/{}...", current, max_attempts);
            operation()
        };
        let condition = |error: &E| {
            let transient = error.is_transient();
            let current = attempt.load(Ordering::Relaxed);
            if transient && current < max_attempts {
                warn!("⚠️ Attempt {}/{} failed: {}. Retrying in {:?}...", current, max_attempts, error, self.wait);
            }
            transient
        };

        let retry = RetryIf::start(strategy, action, condition);
        let result = match self.deadline {
            Some(deadline) => match timeout(deadline, retry).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("⏳ Gave up after {:?}, {} attempt(s) made", deadline, attempt.load(Ordering::Relaxed));
                    Err(E::deadline_exceeded(deadline))
                }
            },
            None => retry.await,
        };

        if let Err(error) = &result {
            warn!("❌ Failed after {} attempt(s): {}", attempt.load(Ordering::Relaxed), error);
        }
        result
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_WAIT)
    }
}
