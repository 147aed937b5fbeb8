//! The user directory trait.

use async_trait::async_trait;
use uuid::Uuid;

use authhub_core::entity::User;
use authhub_core::result::AppResult;

/// Abstracts user persistence behind the operations the auth core needs.
///
/// Plain `insert` does not guarantee email uniqueness, so `find_by_email`
/// returns every candidate and callers decide which one matches.
/// Registration goes through `insert_unique_email`, which does guarantee
/// it.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds all users registered under `email`.
    async fn find_by_email(&self, email: &str) -> AppResult<Vec<User>>;

    /// Finds a user by identifier.
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Finds the user holding an outstanding reset token, if any.
    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>>;

    /// Stores a new user record and returns it.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Stores `user` only if no existing record claims the same email.
    ///
    /// The check and the insert are one atomic step; of two concurrent
    /// calls for the same email exactly one succeeds, the other gets a
    /// `Conflict` error.
    async fn insert_unique_email(&self, user: User) -> AppResult<User>;

    /// Replaces an existing user record.
    async fn update(&self, user: &User) -> AppResult<()>;
}
