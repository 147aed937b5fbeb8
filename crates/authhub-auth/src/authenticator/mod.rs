//! The request-facing authentication capability.
//!
//! No framework types cross this boundary: the HTTP layer distills a
//! request down to [`Credentials`] and translates the results back into
//! status codes (401 when no credential material is present, 403 when the
//! material fails to resolve to a user).

pub mod basic;
pub mod session;

use std::sync::Arc;

use async_trait::async_trait;

use authhub_core::config::auth::{AuthConfig, AuthStrategy};
use authhub_core::entity::User;
use authhub_directory::UserDirectory;

use crate::exclusion::ExcludedPaths;
use crate::password::PasswordHasher;
use crate::session::SessionStore;
use crate::verifier::CredentialVerifier;

pub use basic::BasicAuthenticator;
pub use session::SessionAuthenticator;

/// Credential material extracted verbatim from a request.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// The `Authorization` header value, untouched.
    pub authorization: Option<String>,
    /// The session cookie value, untouched.
    pub session_cookie: Option<String>,
}

impl Credentials {
    /// The raw `Authorization` header; `None` when the request carried none.
    pub fn authorization_header(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// Whether the request carried any credential material at all.
    pub fn is_empty(&self) -> bool {
        self.authorization.is_none() && self.session_cookie.is_none()
    }
}

/// An authentication mechanism serving the HTTP layer.
///
/// Implementations are independent variants selected by configuration;
/// there is no dispatch hierarchy between them.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Whether a request to `path` must be authenticated.
    fn requires_auth(&self, path: &str) -> bool;

    /// Resolves the request's credential material to a user, or `None`.
    async fn current_user(&self, credentials: &Credentials) -> Option<User>;
}

/// Builds the configured authenticator variant.
pub fn from_config(
    config: &AuthConfig,
    directory: Arc<dyn UserDirectory>,
    sessions: Arc<SessionStore>,
) -> Arc<dyn Authenticator> {
    let excluded = ExcludedPaths::new(config.excluded_paths.clone());

    match config.strategy {
        AuthStrategy::Basic => Arc::new(BasicAuthenticator::new(
            CredentialVerifier::new(directory, PasswordHasher::new()),
            excluded,
        )),
        AuthStrategy::Session => {
            Arc::new(SessionAuthenticator::new(sessions, directory, excluded))
        }
    }
}
