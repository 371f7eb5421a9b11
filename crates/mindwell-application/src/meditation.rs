//! Meditation catalog use case.
//!
//! "Starting" a session records it and confirms; nothing is played.

use std::sync::Arc;

use mindwell_core::entries::MeditationRecord;
use mindwell_core::meditation;
use mindwell_core::profile::COUNTER_MEDITATION;
use mindwell_core::store::{DocumentStore, WriteBatch, collections};

use crate::auth_gateway::AuthGateway;
use crate::view::{MeditationView, Notice, SessionRow};

pub struct MeditationService {
    auth: Arc<AuthGateway>,
    store: Arc<dyn DocumentStore>,
}

impl MeditationService {
    pub fn new(auth: Arc<AuthGateway>, store: Arc<dyn DocumentStore>) -> Self {
        Self { auth, store }
    }

    /// Resolves a category key against the fixed catalog. Unrecognized keys
    /// fall back to the recommended sessions under the generic title.
    pub fn load_sessions(&self, category_key: &str) -> MeditationView {
        let page = meditation::lookup(category_key);
        MeditationView {
            title: page.title.to_string(),
            sessions: page
                .sessions
                .iter()
                .map(|session| SessionRow {
                    name: session.name.to_string(),
                    description: session.description.to_string(),
                    duration_minutes: session.duration_minutes,
                    action_label: format!("Start ({}m)", session.duration_minutes),
                })
                .collect(),
        }
    }

    /// Records a started session and confirms.
    ///
    /// This is a lower-stakes path: a failure is logged and swallowed, the
    /// user sees no error.
    pub async fn start_session(&self, name: &str, duration_minutes: u32) -> Option<Notice> {
        let session = match self.auth.current_session().await {
            Some(session) => session,
            None => {
                tracing::warn!("[Meditation] Start requested without a session");
                return None;
            }
        };

        let record = MeditationRecord::new(name, duration_minutes, &session.user_id);
        let batch = match serde_json::to_value(&record) {
            Ok(document) => WriteBatch::new()
                .insert(collections::MEDITATION_SESSIONS, document)
                .increment(collections::USERS, &session.user_id, COUNTER_MEDITATION, 1),
            Err(e) => {
                tracing::error!("[Meditation] Error recording meditation: {}", e);
                return None;
            }
        };

        match self.store.commit(batch).await {
            Ok(()) => Some(Notice::info(format!(
                "Starting {name} for {duration_minutes} minutes..."
            ))),
            Err(e) => {
                tracing::error!("[Meditation] Error recording meditation: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeAuthBackend, FakeDocumentStore, MemoryCredentialStore};
    use mindwell_core::auth::TokenCell;
    use mindwell_core::profile::ProfileAggregate;

    struct Fixture {
        service: MeditationService,
        auth: Arc<AuthGateway>,
        store: Arc<FakeDocumentStore>,
    }

    async fn signed_in_fixture() -> Fixture {
        let backend = Arc::new(FakeAuthBackend::default());
        let store = Arc::new(FakeDocumentStore::default());
        let auth = Arc::new(AuthGateway::new(
            backend,
            store.clone(),
            Arc::new(MemoryCredentialStore::default()),
            TokenCell::new(),
        ));
        auth.sign_up("Anu", "a@x.com", "secret1").await.unwrap();

        let service = MeditationService::new(auth.clone(), store.clone());
        Fixture {
            service,
            auth,
            store,
        }
    }

    #[tokio::test]
    async fn test_unknown_category_falls_back_to_recommended() {
        let f = signed_in_fixture().await;
        let view = f.service.load_sessions("zen");
        assert_eq!(view.title, "Meditation Sessions");
        assert_eq!(view.sessions.len(), 2);
        assert_eq!(view.sessions[0].name, "Morning Mindfulness");
    }

    #[tokio::test]
    async fn test_known_category_gets_specific_title_and_labels() {
        let f = signed_in_fixture().await;
        let view = f.service.load_sessions("sleep");
        assert_eq!(view.title, "Sleep Meditation");
        assert_eq!(view.sessions[0].action_label, "Start (15m)");
        assert_eq!(view.sessions[1].action_label, "Start (10m)");
    }

    #[tokio::test]
    async fn test_start_records_and_confirms() {
        let f = signed_in_fixture().await;
        let session = f.auth.current_session().await.unwrap();

        let notice = f
            .service
            .start_session("Morning Mindfulness", 10)
            .await
            .expect("confirmation");
        assert_eq!(notice.text, "Starting Morning Mindfulness for 10 minutes...");

        assert_eq!(f.store.count_documents(collections::MEDITATION_SESSIONS), 1);
        let doc = f
            .store
            .get(collections::USERS, &session.user_id)
            .await
            .unwrap()
            .unwrap();
        let profile: ProfileAggregate = doc.parse().unwrap();
        assert_eq!(profile.meditation_sessions, 1);
    }

    #[tokio::test]
    async fn test_start_failure_is_silent() {
        let f = signed_in_fixture().await;
        f.store.fail_next_commit();

        // No confirmation and no user-facing error; the failure is logged.
        assert!(f.service.start_session("Calm Breathing", 8).await.is_none());
        assert_eq!(f.store.count_documents(collections::MEDITATION_SESSIONS), 0);
    }
}
