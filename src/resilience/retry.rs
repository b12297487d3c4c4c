//! Throttle-aware retry with bounded exponential backoff.
//!
//! The policy is an explicit value passed to every caller rather than
//! ambient configuration, so tests can inject [`RetryPolicy::no_delay`] and
//! stay deterministic. Only errors whose remote code is in the policy's
//! throttle set are retried; everything else, including not-found
//! rejections, passes through untouched on the first attempt.

use crate::{Error, Result};
use std::collections::HashSet;
use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Immutable retry configuration for throttled remote calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    min_delay: Duration,
    max_delay: Duration,
    jitter: bool,
    throttle_codes: HashSet<String>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            min_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            jitter: true,
            throttle_codes: ["Throttled", "ThrottlingException"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-sleep, zero-retry policy for deterministic tests.
    pub fn no_delay() -> Self {
        Self {
            max_retries: 0,
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter: false,
            throttle_codes: ["Throttled", "ThrottlingException"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Replace the set of remote error codes classified as throttling.
    pub fn with_throttle_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.throttle_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Whether the policy classifies this error as throttling.
    pub fn is_throttle(&self, err: &Error) -> bool {
        err.code()
            .map(|c| self.throttle_codes.contains(c))
            .unwrap_or(false)
    }

    /// Backoff for the given 0-based attempt: `min_delay * 2^attempt`,
    /// capped at `max_delay`, optionally jittered into `[delay/2, delay]`.
    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.min_delay.as_millis() as u64;
        let cap = self.max_delay.as_millis() as u64;

        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        let mut delay = base.saturating_mul(factor).min(cap);

        if self.jitter && delay > 1 {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or(Duration::ZERO)
                .subsec_nanos() as u64;
            let half = delay / 2;
            delay = half + nanos % (half + 1);
        }

        Duration::from_millis(delay)
    }

    /// Run `op`, retrying on throttle-classified errors up to the bound.
    ///
    /// The final throttle error (or any non-throttle error, immediately) is
    /// returned as-is.
    pub async fn invoke<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt: u32 = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if self.is_throttle(&err) && attempt < self.max_retries => {
                    let delay = self.backoff(attempt);
                    tracing::debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "throttled, backing off before retry"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
