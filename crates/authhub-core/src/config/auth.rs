//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Which authenticator variant handles requests.
    pub strategy: AuthStrategy,
    /// Name of the cookie that transports the session identifier.
    pub session_cookie: String,
    /// Route patterns exempt from authentication enforcement.
    ///
    /// Exact patterns are compared against the request path with a trailing
    /// slash; patterns ending in `*` match by prefix.
    pub excluded_paths: Vec<String>,
    /// Minimum accepted password length at registration.
    pub password_min_length: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            strategy: AuthStrategy::default(),
            session_cookie: "session_id".to_string(),
            excluded_paths: vec![
                "/api/v1/status/".to_string(),
                "/api/v1/users/".to_string(),
                "/api/v1/sessions/".to_string(),
                "/api/v1/reset_password/".to_string(),
            ],
            password_min_length: 8,
        }
    }
}

/// Selects which authenticator implementation serves the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStrategy {
    /// HTTP Basic Auth: credentials carried on every request.
    Basic,
    /// Cookie-based sessions established at login.
    Session,
}

impl Default for AuthStrategy {
    fn default() -> Self {
        Self::Session
    }
}

impl std::fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthStrategy::Basic => write!(f, "basic"),
            AuthStrategy::Session => write!(f, "session"),
        }
    }
}
