//! Property tests for the probe retry policy

use std::time::Duration;

use proptest::prelude::*;
use remoteops_core::{RetryPolicy, RetryState};

proptest! {
    /// Property: a policy with N retries makes N + 1 attempts
    #[test]
    fn total_attempts_is_retries_plus_one(retries in 0u32..1000) {
        prop_assert_eq!(
            RetryPolicy::new(retries, Duration::ZERO).total_attempts(),
            retries + 1
        );
    }

    /// Property: every pause has the configured length, and there is exactly
    /// one pause per retry
    #[test]
    fn constant_delay_once_per_retry(retries in 0u32..20, delay_ms in 0u64..10_000) {
        let policy = RetryPolicy::new(retries, Duration::from_millis(delay_ms));
        let mut state = RetryState::new(policy);

        let mut pauses = Vec::new();
        for attempt in 0..policy.total_attempts() {
            match state.record_failure(format!("attempt {attempt}")) {
                Some(pause) => pauses.push(pause),
                None => break,
            }
        }

        prop_assert_eq!(pauses.len(), retries as usize);
        prop_assert!(pauses.iter().all(|p| *p == Duration::from_millis(delay_ms)));
        prop_assert_eq!(state.failed_attempts(), retries + 1);
    }
}
