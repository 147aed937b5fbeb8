//! Argon2id password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHasher as ArgonHasher};

use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;

/// Hashes and verifies passwords with Argon2id.
///
/// Each hash carries a fresh random salt; salt and parameters travel inside
/// the PHC string, so verification needs no state beyond the stored hash.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Produces a PHC-formatted Argon2id hash of `password`.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "password hashing failed", e))?;
        Ok(hash.to_string())
    }

    /// Checks `password` against a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`. Only an unusable stored hash is an error.
    pub fn verify_password(&self, password: &str, stored: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(stored).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "stored password hash is malformed", e)
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Internal,
                "password verification failed",
                e,
            )),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("Correct-Horse-9").unwrap();
        assert!(hasher.verify_password("Correct-Horse-9", &hash).unwrap());
        assert!(!hasher.verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_distinct_salted_hashes() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash_password("Correct-Horse-9").unwrap();
        let b = hasher.hash_password("Correct-Horse-9").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new();
        let err = hasher.verify_password("pw", "not-a-phc-string").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert!(err.source.is_some());
    }

    #[test]
    fn test_hash_is_phc_formatted_argon2id() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("Correct-Horse-9").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }
}
