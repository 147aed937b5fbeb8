//! Session entity and the opaque session identifier.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque session token transported as a cookie value.
///
/// The token is an unstructured random string; nothing in the system
/// interprets it beyond equality lookup. Tokens are drawn from the OS
/// random source, so they are unguessable and unique across the store's
/// lifetime with overwhelming probability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random session identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for SessionId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// A login session mapping an opaque token to a user.
///
/// Owned exclusively by the session store; created on successful login and
/// destroyed on logout or expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The opaque session token.
    pub id: SessionId,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires, if it expires at all.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the session is expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }
}
