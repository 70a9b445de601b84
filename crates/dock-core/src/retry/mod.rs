//! Bounded retry loop around the connect workflow.
//!
//! The loop is strictly sequential: attempt `n + 1` starts only after attempt `n`
//! failed and the fixed backoff elapsed.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use tracing::{debug, error, warn};

use dock_model::RetryState;

use crate::error::{AttemptError, CoreError};

/// Attempts are counted from 1; `max_attempts` includes the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(5),
        }
    }
}

/// Blocking pause between attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, delay: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

pub struct RetryController<'a> {
    policy: RetryPolicy,
    sleeper: &'a dyn Sleeper,
}

impl<'a> RetryController<'a> {
    pub fn new(policy: RetryPolicy, sleeper: &'a dyn Sleeper) -> Self {
        Self { policy, sleeper }
    }

    #[inline]
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Drive `attempt` until it succeeds or the policy is exhausted.
    ///
    /// `attempt` receives the 1-based attempt number. Returns the number of the
    /// successful attempt.
    pub async fn run<F, Fut>(&self, mut attempt: F) -> Result<u32, CoreError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<(), AttemptError>>,
    {
        let max = self.policy.max_attempts.max(1);
        let backoff = self.policy.backoff;
        let mut n = 1;

        loop {
            debug!(target: "dock.core.retry", state = ?RetryState::Attempting(n), max, "attempt started");

            let err = match attempt(n).await {
                Ok(()) => {
                    debug!(target: "dock.core.retry", state = ?RetryState::Succeeded, attempt = n, "attempt succeeded");
                    return Ok(n);
                }
                Err(e) => e,
            };

            if n >= max {
                error!(
                    target: "dock.core.retry",
                    state = ?RetryState::Failed,
                    attempt = n,
                    step = err.step(),
                    error = %err,
                    "maximum retries reached"
                );
                return Err(CoreError::RetriesExhausted {
                    attempts: n,
                    last: err,
                });
            }

            if matches!(err, AttemptError::SessionLaunchFailed(_)) {
                warn!(
                    target: "dock.core.retry",
                    attempt = n,
                    error = %err,
                    "retrying with a new ECS task and container instance in {backoff:?}"
                );
            } else {
                warn!(
                    target: "dock.core.retry",
                    attempt = n,
                    step = err.step(),
                    error = %err,
                    "retrying in {backoff:?}"
                );
            }
            self.sleeper.sleep(backoff).await;
            n += 1;
        }
    }
}
