//! In-memory user directory backed by a concurrent map.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use authhub_core::entity::User;
use authhub_core::error::AppError;
use authhub_core::result::AppResult;

use crate::directory::UserDirectory;

/// In-memory user directory.
///
/// Lookups by email and reset token scan the map; acceptable at the user
/// counts this store is meant for. Suitable for single-node deployments
/// and tests only.
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    /// Users keyed by identifier.
    users: DashMap<Uuid, User>,
    /// Email claims for unique inserts; first writer wins.
    emails: DashMap<String, Uuid>,
}

impl MemoryUserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
        }
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|entry| entry.email == email)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.reset_token.as_deref() == Some(token))
            .map(|entry| entry.value().clone()))
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        debug!(user_id = %user.id, "Storing user");
        self.emails.entry(user.email.clone()).or_insert(user.id);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn insert_unique_email(&self, user: User) -> AppResult<User> {
        // The entry guard on the claims map makes check-then-insert atomic.
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("email already registered")),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                debug!(user_id = %user.id, "Storing user");
                self.users.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        match self.users.get_mut(&user.id) {
            Some(mut entry) => {
                let mut updated = user.clone();
                updated.updated_at = Utc::now();
                *entry = updated;
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "No user with id {} to update",
                user.id
            ))),
        }
    }
}
