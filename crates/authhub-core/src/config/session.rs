//! Session management configuration.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Expiry policy applied to new sessions.
    pub expiry: ExpiryPolicy,
    /// Session lifetime in seconds, measured from creation (absolute) or
    /// from the last successful lookup (sliding). Ignored when the policy
    /// is `none`.
    pub ttl_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry: ExpiryPolicy::default(),
            ttl_seconds: 86_400,
        }
    }
}

impl SessionConfig {
    /// Computes the expiry deadline for a session touched at `now`.
    ///
    /// Returns `None` when sessions do not expire. A TTL too large to
    /// represent as a timestamp is treated the same way rather than
    /// overflowing.
    pub fn expiry_deadline(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.expiry {
            ExpiryPolicy::None => None,
            ExpiryPolicy::Absolute | ExpiryPolicy::Sliding => i64::try_from(self.ttl_seconds)
                .ok()
                .and_then(Duration::try_seconds)
                .and_then(|ttl| now.checked_add_signed(ttl)),
        }
    }
}

/// How session expiry is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPolicy {
    /// Sessions live until explicitly destroyed.
    None,
    /// Sessions expire a fixed duration after creation.
    Absolute,
    /// Each successful lookup extends the session by the configured TTL.
    Sliding,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_expiry_has_no_deadline() {
        let config = SessionConfig {
            expiry: ExpiryPolicy::None,
            ttl_seconds: 60,
        };
        assert!(config.expiry_deadline(Utc::now()).is_none());
    }

    #[test]
    fn test_absolute_deadline_is_ttl_from_now() {
        let config = SessionConfig {
            expiry: ExpiryPolicy::Absolute,
            ttl_seconds: 60,
        };
        let now = Utc::now();
        let deadline = config.expiry_deadline(now).unwrap();
        assert_eq!(deadline - now, Duration::seconds(60));
    }

    #[test]
    fn test_unrepresentable_ttl_does_not_panic() {
        let config = SessionConfig {
            expiry: ExpiryPolicy::Absolute,
            ttl_seconds: u64::MAX,
        };
        assert!(config.expiry_deadline(Utc::now()).is_none());

        let config = SessionConfig {
            expiry: ExpiryPolicy::Sliding,
            ttl_seconds: i64::MAX as u64,
        };
        assert!(config.expiry_deadline(Utc::now()).is_none());
    }
}
