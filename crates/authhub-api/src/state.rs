//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use authhub_auth::account::AccountService;
use authhub_auth::authenticator::Authenticator;
use authhub_auth::session::SessionStore;
use authhub_core::config::AppConfig;
use authhub_directory::UserDirectory;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User lookup collaborator.
    pub directory: Arc<dyn UserDirectory>,
    /// Session store.
    pub sessions: Arc<SessionStore>,
    /// The configured authenticator variant.
    pub authenticator: Arc<dyn Authenticator>,
    /// Account flows (register, login, reset).
    pub accounts: Arc<AccountService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}
