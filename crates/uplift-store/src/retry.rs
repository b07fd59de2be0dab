//! Turso transient error retry logic.
//!
//! Provides backoff configuration and a predicate for transient Turso cloud
//! infrastructure errors (node recycling, shared lock contention during
//! provisioning/deletion). These surface as HTTP 400 responses from the
//! Hrana API and resolve on their own within seconds.
//!
//! Local-only databases never encounter these errors — callers gate the
//! retry path on `UpliftDb::is_synced_replica`.

use std::time::Duration;

/// Configuration for retry behavior on transient Turso errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// Delay before the given retry (0-based), exponential and capped.
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Detect transient Turso infrastructure errors.
///
/// These are 400-level Hrana errors that occur when Turso cloud nodes are
/// being created, deleted, or recycled. They are not application bugs.
///
/// The predicate is intentionally narrow to avoid retrying genuine SQL or
/// constraint errors.
#[must_use]
pub fn is_transient_turso_error(e: &libsql::Error) -> bool {
    let msg = e.to_string();
    msg.contains("unable to acquire shared lock")
        || msg.contains("deletion must be in progress")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_is_exponential_and_capped() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for(0), Duration::from_millis(100));
        assert_eq!(config.delay_for(1), Duration::from_millis(200));
        assert_eq!(config.delay_for(2), Duration::from_millis(400));
        assert_eq!(config.delay_for(10), Duration::from_secs(2));
    }
}
