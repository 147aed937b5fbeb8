//! In-memory session store.

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use authhub_core::config::session::{ExpiryPolicy, SessionConfig};
use authhub_core::entity::{Session, SessionId};

/// Concurrent in-memory mapping from session token to session record.
///
/// Constructed once per process and shared by the request handlers.
/// Expiry is lazy: an expired entry behaves as absent and is removed at
/// lookup time, never by a background sweep.
#[derive(Debug)]
pub struct SessionStore {
    /// Active sessions keyed by token.
    sessions: DashMap<SessionId, Session>,
    /// Expiry configuration.
    config: SessionConfig,
}

impl SessionStore {
    /// Creates an empty store with the given expiry configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Creates a session for `user_id` and returns the full record.
    pub fn create(&self, user_id: Uuid) -> Session {
        let now = Utc::now();
        let session = Session {
            id: SessionId::generate(),
            user_id,
            created_at: now,
            expires_at: self.config.expiry_deadline(now),
        };

        debug!(user_id = %user_id, "Created session");
        self.sessions.insert(session.id.clone(), session.clone());
        session
    }

    /// Resolves a session token to its user, honoring lazy expiry.
    ///
    /// Under the sliding policy a successful lookup renews the deadline.
    pub fn user_id_for(&self, id: &SessionId) -> Option<Uuid> {
        let now = Utc::now();

        let user_id = {
            let mut entry = self.sessions.get_mut(id)?;
            if entry.is_expired(now) {
                None
            } else {
                if self.config.expiry == ExpiryPolicy::Sliding {
                    entry.expires_at = self.config.expiry_deadline(now);
                }
                Some(entry.user_id)
            }
            // guard dropped here; removal below must not hold it
        };

        match user_id {
            Some(user_id) => Some(user_id),
            None => {
                self.sessions.remove(id);
                debug!(session_id = %id, "Removed expired session at lookup");
                None
            }
        }
    }

    /// Removes the session if present. Idempotent: a second destroy of the
    /// same token reports `false`, and the token never resolves again.
    pub fn destroy(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Number of stored sessions, expired entries included.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn store_without_expiry() -> SessionStore {
        SessionStore::new(SessionConfig {
            expiry: ExpiryPolicy::None,
            ttl_seconds: 0,
        })
    }

    #[test]
    fn test_unknown_token_resolves_to_none() {
        let store = store_without_expiry();
        assert!(store.user_id_for(&SessionId::generate()).is_none());
    }

    #[test]
    fn test_create_then_lookup_round_trips_user_id() {
        let store = store_without_expiry();
        let user_id = Uuid::new_v4();
        let session = store.create(user_id);
        assert_eq!(store.user_id_for(&session.id), Some(user_id));
    }

    #[test]
    fn test_destroy_is_idempotent_and_final() {
        let store = store_without_expiry();
        let session = store.create(Uuid::new_v4());

        assert!(store.destroy(&session.id));
        assert!(!store.destroy(&session.id));
        assert!(store.user_id_for(&session.id).is_none());
    }

    #[test]
    fn test_expired_session_behaves_as_absent() {
        let store = SessionStore::new(SessionConfig {
            expiry: ExpiryPolicy::Absolute,
            ttl_seconds: 3600,
        });
        let session = store.create(Uuid::new_v4());

        // Force the deadline into the past instead of sleeping.
        store
            .sessions
            .get_mut(&session.id)
            .map(|mut s| s.expires_at = Some(Utc::now() - Duration::seconds(1)));

        assert!(store.user_id_for(&session.id).is_none());
        // Lazy removal happened at lookup.
        assert_eq!(store.len(), 0);
        assert!(!store.destroy(&session.id));
    }

    #[test]
    fn test_sliding_policy_renews_deadline_on_lookup() {
        let store = SessionStore::new(SessionConfig {
            expiry: ExpiryPolicy::Sliding,
            ttl_seconds: 3600,
        });
        let session = store.create(Uuid::new_v4());

        let before = store.sessions.get(&session.id).unwrap().expires_at.unwrap();
        assert!(store.user_id_for(&session.id).is_some());
        let after = store.sessions.get(&session.id).unwrap().expires_at.unwrap();
        assert!(after >= before);
    }

    #[test]
    fn test_absolute_policy_does_not_renew() {
        let store = SessionStore::new(SessionConfig {
            expiry: ExpiryPolicy::Absolute,
            ttl_seconds: 3600,
        });
        let session = store.create(Uuid::new_v4());

        let before = store.sessions.get(&session.id).unwrap().expires_at.unwrap();
        assert!(store.user_id_for(&session.id).is_some());
        let after = store.sessions.get(&session.id).unwrap().expires_at.unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_ten_thousand_tokens_are_distinct() {
        let store = store_without_expiry();
        let user_id = Uuid::new_v4();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let session = store.create(user_id);
            assert!(seen.insert(session.id.as_str().to_string()));
        }
        assert_eq!(store.len(), 10_000);
    }

    #[test]
    fn test_concurrent_creates_produce_distinct_resolvable_tokens() {
        let store = Arc::new(store_without_expiry());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                let user_id = Uuid::new_v4();
                (0..250)
                    .map(|_| (store.create(user_id).id, user_id))
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for (id, user_id) in handle.join().unwrap() {
                assert_eq!(store.user_id_for(&id), Some(user_id));
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 2_000);
    }
}
