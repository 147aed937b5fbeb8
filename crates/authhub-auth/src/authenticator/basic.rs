//! HTTP Basic Auth: credentials carried on every request.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use authhub_core::entity::User;

use crate::exclusion::ExcludedPaths;
use crate::verifier::CredentialVerifier;

use super::{Authenticator, Credentials};

/// Authenticates requests from a `Basic` Authorization header.
#[derive(Debug, Clone)]
pub struct BasicAuthenticator {
    /// Email/password resolution.
    verifier: CredentialVerifier,
    /// Paths exempt from enforcement.
    excluded: ExcludedPaths,
}

impl BasicAuthenticator {
    /// Creates the authenticator.
    pub fn new(verifier: CredentialVerifier, excluded: ExcludedPaths) -> Self {
        Self { verifier, excluded }
    }
}

/// Decodes a `Basic <base64>` header into an `(email, password)` pair.
///
/// The payload splits on the first colon, so passwords may contain colons.
/// Anything malformed yields `None`: wrong scheme, invalid base64, invalid
/// UTF-8, missing colon, or an empty email or password.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let bytes = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    let (email, password) = decoded.split_once(':')?;

    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some((email.to_string(), password.to_string()))
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn requires_auth(&self, path: &str) -> bool {
        self.excluded.requires_auth(path)
    }

    async fn current_user(&self, credentials: &Credentials) -> Option<User> {
        let header = credentials.authorization_header()?;
        let (email, password) = decode_basic(header)?;
        self.verifier.resolve_user(&email, &password).await
    }
}
