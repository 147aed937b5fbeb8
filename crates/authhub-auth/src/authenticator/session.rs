//! Cookie-based session authentication.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use authhub_core::entity::{SessionId, User};
use authhub_directory::UserDirectory;

use crate::exclusion::ExcludedPaths;
use crate::session::SessionStore;

use super::{Authenticator, Credentials};

/// Authenticates requests from the session cookie.
pub struct SessionAuthenticator {
    /// Session token to user-id mapping.
    sessions: Arc<SessionStore>,
    /// User lookup collaborator.
    directory: Arc<dyn UserDirectory>,
    /// Paths exempt from enforcement.
    excluded: ExcludedPaths,
}

impl std::fmt::Debug for SessionAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthenticator")
            .field("excluded", &self.excluded)
            .finish()
    }
}

impl SessionAuthenticator {
    /// Creates the authenticator.
    pub fn new(
        sessions: Arc<SessionStore>,
        directory: Arc<dyn UserDirectory>,
        excluded: ExcludedPaths,
    ) -> Self {
        Self {
            sessions,
            directory,
            excluded,
        }
    }
}

#[async_trait]
impl Authenticator for SessionAuthenticator {
    fn requires_auth(&self, path: &str) -> bool {
        self.excluded.requires_auth(path)
    }

    async fn current_user(&self, credentials: &Credentials) -> Option<User> {
        let token = credentials.session_cookie.as_deref()?;
        let session_id = SessionId::from(token);
        let user_id = self.sessions.user_id_for(&session_id)?;

        match self.directory.get_by_id(user_id).await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "User lookup failed during session resolution");
                None
            }
        }
    }
}
