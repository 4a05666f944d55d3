//! Reachability probe retry policy
//!
//! The probe is retried a fixed number of times with a constant pause in
//! between. There is no backoff: every wait lasts exactly `delay`.

use std::time::Duration;

/// Default number of retries after the first probe attempt
pub const DEFAULT_RETRIES: u32 = 0;

/// Default pause between probe attempts in seconds
pub const DEFAULT_RETRY_SLEEP_SECS: u64 = 10;

/// How often and how patiently the reachability probe is repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first one (0 = single attempt)
    pub retries: u32,
    /// Pause between consecutive attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            delay: Duration::from_secs(DEFAULT_RETRY_SLEEP_SECS),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given retry count and delay
    #[must_use]
    pub const fn new(retries: u32, delay: Duration) -> Self {
        Self { retries, delay }
    }

    /// Creates a policy that makes exactly one attempt
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            retries: 0,
            delay: Duration::ZERO,
        }
    }

    /// Sets the number of retries
    #[must_use]
    pub const fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the delay between attempts in whole seconds
    #[must_use]
    pub const fn with_delay_secs(mut self, secs: u64) -> Self {
        self.delay = Duration::from_secs(secs);
        self
    }

    /// Sets the delay between attempts
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the total number of attempts (initial + retries)
    #[must_use]
    pub const fn total_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Returns whether another attempt may follow `failed_attempts` failures
    #[must_use]
    pub const fn should_retry(&self, failed_attempts: u32) -> bool {
        failed_attempts <= self.retries && failed_attempts > 0
    }

    /// Returns the pause to take after `failed_attempts` failures, or `None`
    /// once the budget is spent.
    #[must_use]
    pub const fn delay_for_attempt(&self, failed_attempts: u32) -> Option<Duration> {
        if self.should_retry(failed_attempts) {
            Some(self.delay)
        } else {
            None
        }
    }
}

/// Tracks progress through a [`RetryPolicy`]
#[derive(Debug, Clone)]
pub struct RetryState {
    policy: RetryPolicy,
    failed_attempts: u32,
    last_error: Option<String>,
}

impl RetryState {
    /// Creates a fresh state for the given policy
    #[must_use]
    pub const fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            failed_attempts: 0,
            last_error: None,
        }
    }

    /// Number of attempts that have failed so far
    #[must_use]
    pub const fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// 1-indexed number of the attempt about to run, for display
    #[must_use]
    pub const fn attempt_number(&self) -> u32 {
        self.failed_attempts + 1
    }

    /// Records a failed attempt.
    ///
    /// Returns the pause to take before the next attempt, or `None` when the
    /// retry budget is exhausted.
    pub fn record_failure(&mut self, error: impl Into<String>) -> Option<Duration> {
        self.last_error = Some(error.into());
        self.failed_attempts += 1;
        self.policy.delay_for_attempt(self.failed_attempts)
    }

    /// Records a successful attempt
    pub fn record_success(&mut self) {
        self.last_error = None;
    }

    /// Returns the message of the most recent failure
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
