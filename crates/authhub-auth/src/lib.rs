//! # authhub-auth
//!
//! The authentication core for AuthHub.
//!
//! ## Modules
//!
//! - `exclusion`: path patterns exempt from authentication enforcement
//! - `session`: in-memory session store with lazy expiry
//! - `password`: Argon2id password hashing and policy enforcement
//! - `verifier`: email/password resolution against the user directory
//! - `authenticator`: the request-facing auth capability (Basic or Session)
//! - `account`: registration, login, logout, and password-reset flows

pub mod account;
pub mod authenticator;
pub mod exclusion;
pub mod password;
pub mod session;
pub mod verifier;

pub use account::AccountService;
pub use authenticator::{Authenticator, BasicAuthenticator, Credentials, SessionAuthenticator};
pub use exclusion::ExcludedPaths;
pub use password::{PasswordHasher, PasswordValidator};
pub use session::SessionStore;
pub use verifier::CredentialVerifier;
