//! Profile page use case.

use std::sync::Arc;

use mindwell_core::profile::ProfileAggregate;
use mindwell_core::store::{DocumentStore, collections};

use crate::auth_gateway::AuthGateway;
use crate::view::{ProfileCounters, ProfileView};

pub struct ProfileService {
    auth: Arc<AuthGateway>,
    store: Arc<dyn DocumentStore>,
}

impl ProfileService {
    pub fn new(auth: Arc<AuthGateway>, store: Arc<dyn DocumentStore>) -> Self {
        Self { auth, store }
    }

    /// Builds the profile view.
    ///
    /// Identity (name, email, avatar initial) comes straight from the
    /// session with no network dependency; the aggregate document is then
    /// fetched for the three counters, each defaulting to 0 when absent.
    /// A fetch failure is logged only - the identity still renders.
    pub async fn load(&self) -> Option<ProfileView> {
        let session = self.auth.current_session().await?;

        let mut view = ProfileView {
            name: session.display_label().to_string(),
            email: session.email.clone(),
            avatar_initial: session.avatar_initial(),
            counters: None,
        };

        match self.store.get(collections::USERS, &session.user_id).await {
            Ok(Some(doc)) => match doc.parse::<ProfileAggregate>() {
                Ok(profile) => {
                    view.counters = Some(ProfileCounters {
                        mood_entries: profile.mood_entries,
                        journal_entries: profile.journal_entries,
                        meditation_sessions: profile.meditation_sessions,
                    });
                }
                Err(e) => {
                    tracing::warn!("[Profile] Malformed profile document: {}", e);
                }
            },
            Ok(None) => {
                view.counters = Some(ProfileCounters {
                    mood_entries: 0,
                    journal_entries: 0,
                    meditation_sessions: 0,
                });
            }
            Err(e) => {
                tracing::warn!("[Profile] Error loading profile data: {}", e);
            }
        }

        Some(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeAuthBackend, FakeDocumentStore, MemoryCredentialStore};
    use mindwell_core::auth::TokenCell;

    async fn gateway(store: Arc<FakeDocumentStore>) -> Arc<AuthGateway> {
        let auth = Arc::new(AuthGateway::new(
            Arc::new(FakeAuthBackend::default()),
            store,
            Arc::new(MemoryCredentialStore::default()),
            TokenCell::new(),
        ));
        auth.sign_up("Anu", "a@x.com", "secret1").await.unwrap();
        auth
    }

    #[tokio::test]
    async fn test_identity_renders_from_session() {
        let store = Arc::new(FakeDocumentStore::default());
        let auth = gateway(store.clone()).await;
        let service = ProfileService::new(auth, store);

        let view = service.load().await.unwrap();
        assert_eq!(view.name, "Anu");
        assert_eq!(view.email, "a@x.com");
        assert_eq!(view.avatar_initial, 'A');
    }

    #[tokio::test]
    async fn test_fresh_account_has_zeroed_counters() {
        let store = Arc::new(FakeDocumentStore::default());
        let auth = gateway(store.clone()).await;
        let service = ProfileService::new(auth, store);

        let counters = service.load().await.unwrap().counters.unwrap();
        assert_eq!(counters.mood_entries, 0);
        assert_eq!(counters.journal_entries, 0);
        assert_eq!(counters.meditation_sessions, 0);
    }

    #[tokio::test]
    async fn test_no_session_is_noop() {
        let store = Arc::new(FakeDocumentStore::default());
        let auth = Arc::new(AuthGateway::new(
            Arc::new(FakeAuthBackend::default()),
            store.clone(),
            Arc::new(MemoryCredentialStore::default()),
            TokenCell::new(),
        ));
        let service = ProfileService::new(auth, store);
        assert!(service.load().await.is_none());
    }
}
