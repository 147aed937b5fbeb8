//! Account flows: registration, login, logout, and password reset.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use authhub_core::entity::{Session, SessionId, User};
use authhub_core::error::AppError;
use authhub_core::result::AppResult;
use authhub_directory::UserDirectory;

use crate::password::{PasswordHasher, PasswordValidator};
use crate::session::SessionStore;
use crate::verifier::CredentialVerifier;

/// The user-authentication service composing the directory, session store,
/// and password primitives.
#[derive(Clone)]
pub struct AccountService {
    /// User lookup and persistence.
    directory: Arc<dyn UserDirectory>,
    /// Session token mapping.
    sessions: Arc<SessionStore>,
    /// Password hashing.
    hasher: PasswordHasher,
    /// Password policy at registration and reset.
    validator: PasswordValidator,
    /// Email/password resolution.
    verifier: CredentialVerifier,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish()
    }
}

impl AccountService {
    /// Creates the service.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        sessions: Arc<SessionStore>,
        hasher: PasswordHasher,
        validator: PasswordValidator,
    ) -> Self {
        let verifier = CredentialVerifier::new(Arc::clone(&directory), hasher.clone());
        Self {
            directory,
            sessions,
            hasher,
            validator,
            verifier,
        }
    }

    /// Registers a new user. The email must not already be registered and
    /// the password must pass policy.
    pub async fn register_user(&self, email: &str, password: &str) -> AppResult<User> {
        if email.is_empty() {
            return Err(AppError::validation("Email must not be empty"));
        }
        self.validator.validate(password)?;

        // The directory enforces email uniqueness atomically, so two
        // concurrent registrations of the same email admit exactly one.
        let hash = self.hasher.hash_password(password)?;
        let user = self
            .directory
            .insert_unique_email(User::new(email, hash))
            .await?;
        info!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    /// Whether `email`/`password` identify a registered user.
    pub async fn valid_login(&self, email: &str, password: &str) -> bool {
        self.verifier.resolve_user(email, password).await.is_some()
    }

    /// Logs a user in, creating a session for the resolved account.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        let user = self
            .verifier
            .resolve_user(email, password)
            .await
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let session = self.sessions.create(user.id);
        info!(user_id = %user.id, "User logged in");
        Ok(session)
    }

    /// Resolves a session token to its user.
    pub async fn user_from_session(&self, session_id: &SessionId) -> AppResult<Option<User>> {
        match self.sessions.user_id_for(session_id) {
            Some(user_id) => self.directory.get_by_id(user_id).await,
            None => Ok(None),
        }
    }

    /// Destroys the session. Reports whether a session existed.
    pub fn logout(&self, session_id: &SessionId) -> bool {
        self.sessions.destroy(session_id)
    }

    /// Issues a password-reset token for the account registered under
    /// `email`, replacing any outstanding token.
    pub async fn issue_reset_token(&self, email: &str) -> AppResult<String> {
        let mut user = self
            .directory
            .find_by_email(email)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("No user registered under that email"))?;

        let token = Uuid::new_v4().to_string();
        user.reset_token = Some(token.clone());
        self.directory.update(&user).await?;
        info!(user_id = %user.id, "Issued password reset token");
        Ok(token)
    }

    /// Consumes a reset token and installs the new password.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> AppResult<()> {
        let mut user = self
            .directory
            .find_by_reset_token(token)
            .await?
            .ok_or_else(|| AppError::authorization("Invalid reset token"))?;

        self.validator.validate(new_password)?;

        user.password_hash = self.hasher.hash_password(new_password)?;
        user.reset_token = None;
        self.directory.update(&user).await?;
        info!(user_id = %user.id, "Password reset");
        Ok(())
    }
}
