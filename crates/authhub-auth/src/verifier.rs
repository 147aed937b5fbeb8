//! Email/password resolution against the user directory.

use std::sync::Arc;

use tracing::warn;

use authhub_core::entity::User;
use authhub_directory::UserDirectory;

use crate::password::PasswordHasher;

/// Resolves email/password pairs to a user record.
///
/// Any directory failure or malformed input degrades to `None`; nothing
/// here propagates an error into the request-handling path.
#[derive(Clone)]
pub struct CredentialVerifier {
    /// User lookup collaborator.
    directory: Arc<dyn UserDirectory>,
    /// Password hash comparison.
    hasher: PasswordHasher,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier").finish()
    }
}

impl CredentialVerifier {
    /// Creates a verifier over the given directory.
    pub fn new(directory: Arc<dyn UserDirectory>, hasher: PasswordHasher) -> Self {
        Self { directory, hasher }
    }

    /// Resolves `email`/`password` to the first candidate user whose
    /// stored hash verifies. Returns `None` when the email is unknown,
    /// the password matches no candidate, or the directory is unreachable.
    pub async fn resolve_user(&self, email: &str, password: &str) -> Option<User> {
        if email.is_empty() || password.is_empty() {
            return None;
        }

        let candidates = match self.directory.find_by_email(email).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, "User lookup failed during credential check");
                return None;
            }
        };

        for user in candidates {
            match self.hasher.verify_password(password, &user.password_hash) {
                Ok(true) => return Some(user),
                Ok(false) => continue,
                Err(e) => {
                    warn!(user_id = %user.id, error = %e, "Unverifiable password hash");
                    continue;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use authhub_core::entity::User;
    use authhub_core::error::AppError;
    use authhub_core::result::AppResult;
    use authhub_directory::MemoryUserDirectory;
    use uuid::Uuid;

    /// Directory whose every operation fails, for upstream-degradation tests.
    struct UnreachableDirectory;

    #[async_trait]
    impl UserDirectory for UnreachableDirectory {
        async fn find_by_email(&self, _email: &str) -> AppResult<Vec<User>> {
            Err(AppError::internal("directory offline"))
        }
        async fn get_by_id(&self, _id: Uuid) -> AppResult<Option<User>> {
            Err(AppError::internal("directory offline"))
        }
        async fn find_by_reset_token(&self, _token: &str) -> AppResult<Option<User>> {
            Err(AppError::internal("directory offline"))
        }
        async fn insert(&self, _user: User) -> AppResult<User> {
            Err(AppError::internal("directory offline"))
        }
        async fn insert_unique_email(&self, _user: User) -> AppResult<User> {
            Err(AppError::internal("directory offline"))
        }
        async fn update(&self, _user: &User) -> AppResult<()> {
            Err(AppError::internal("directory offline"))
        }
    }

    async fn directory_with(email: &str, password: &str) -> Arc<MemoryUserDirectory> {
        let directory = Arc::new(MemoryUserDirectory::new());
        let hash = PasswordHasher::new().hash_password(password).unwrap();
        directory.insert(User::new(email, hash)).await.unwrap();
        directory
    }

    #[tokio::test]
    async fn test_resolves_matching_credentials() {
        let directory = directory_with("bob@example.com", "Tr4vel-Mug-Parrot").await;
        let verifier = CredentialVerifier::new(directory, PasswordHasher::new());

        let user = verifier
            .resolve_user("bob@example.com", "Tr4vel-Mug-Parrot")
            .await
            .unwrap();
        assert_eq!(user.email, "bob@example.com");
    }

    #[tokio::test]
    async fn test_unknown_email_is_none() {
        let directory = directory_with("bob@example.com", "Tr4vel-Mug-Parrot").await;
        let verifier = CredentialVerifier::new(directory, PasswordHasher::new());

        assert!(
            verifier
                .resolve_user("alice@example.com", "Tr4vel-Mug-Parrot")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_wrong_password_for_every_candidate_is_none() {
        let directory = directory_with("bob@example.com", "Tr4vel-Mug-Parrot").await;
        let verifier = CredentialVerifier::new(directory, PasswordHasher::new());

        assert!(
            verifier
                .resolve_user("bob@example.com", "wrong")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_empty_inputs_are_none() {
        let directory = directory_with("bob@example.com", "Tr4vel-Mug-Parrot").await;
        let verifier = CredentialVerifier::new(directory, PasswordHasher::new());

        assert!(verifier.resolve_user("", "pw").await.is_none());
        assert!(verifier.resolve_user("bob@example.com", "").await.is_none());
    }

    #[tokio::test]
    async fn test_directory_failure_degrades_to_none() {
        let verifier =
            CredentialVerifier::new(Arc::new(UnreachableDirectory), PasswordHasher::new());

        assert!(
            verifier
                .resolve_user("bob@example.com", "Tr4vel-Mug-Parrot")
                .await
                .is_none()
        );
    }
}
