//! Fixed-delay retry for fallible async operations.
//!
//! [`Retry`] re-invokes an operation until it succeeds or the retry budget is
//! spent. Every failure is retried; there is no backoff growth and no jitter.
//! The wait goes through [`Sleeper`] so tests can observe the schedule without
//! real timers.
//!
//! # Schedule
//!
//! With the defaults (3 retries, 2 seconds):
//! ```text
//! attempt 1 -> fail -> sleep 2s -> attempt 2 -> fail -> sleep 2s -> attempt 3
//!           -> fail -> sleep 2s -> attempt 4 -> fail -> error returned
//! ```

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{error, instrument, warn};

pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Something that can suspend the current task for a while.
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by `tokio::time::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}

/// Bounded retry loop.
pub struct Retry<S> {
    sleeper: S,
    /// Additional attempts allowed after the first failure.
    max_retries: usize,
    delay: Duration,
}

impl<S: Sleeper> Retry<S> {
    /// Retry policy with the default budget and delay.
    pub fn new(sleeper: S) -> Self {
        Self::with_policy(sleeper, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY)
    }

    pub fn with_policy(sleeper: S, max_retries: usize, delay: Duration) -> Self {
        Self {
            sleeper,
            max_retries,
            delay,
        }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Run `op` until it succeeds, waiting the fixed delay between attempts.
    ///
    /// At most `max_retries + 1` invocations are made. When the budget is
    /// exhausted the last error is returned unchanged.
    #[instrument(level = "info", skip(self, op))]
    pub async fn run<T, E, F, Fut>(&self, operation: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let total_t0 = Instant::now();
        let mut attempt = 1usize;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let remaining = self.max_retries + 1 - attempt;
                    if remaining == 0 {
                        error!(
                            attempt,
                            max_retries = self.max_retries,
                            elapsed_ms_total = total_t0.elapsed().as_millis() as u64,
                            error = %e,
                            "{operation} exhausted retries"
                        );
                        return Err(e);
                    }

                    warn!(
                        attempt,
                        remaining,
                        delay = ?self.delay,
                        error = %e,
                        "{operation} failed; retrying"
                    );
                    self.sleeper.sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl<S> fmt::Debug for Retry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retry")
            .field("max_retries", &self.max_retries)
            .field("delay", &self.delay)
            .finish()
    }
}
