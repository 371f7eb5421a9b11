//! Mood tracking use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mindwell_core::entries::MoodEntry;
use mindwell_core::error::{MindwellError, Result};
use mindwell_core::profile::COUNTER_MOOD;
use mindwell_core::store::{DocumentStore, WriteBatch, collections};
use mindwell_core::timefmt::{capitalize, format_relative};

use crate::auth_gateway::AuthGateway;
use crate::state_store::UiStateStore;
use crate::view::{ListView, MoodRow, MoodSelectorView, Notice, SelectorScope};

/// Placeholder for entries saved without a note.
const NO_NOTE: &str = "No additional notes";

const HISTORY_PAGE_SIZE: usize = 10;

pub struct MoodService {
    auth: Arc<AuthGateway>,
    store: Arc<dyn DocumentStore>,
    state: Arc<UiStateStore>,
}

impl MoodService {
    pub fn new(
        auth: Arc<AuthGateway>,
        store: Arc<dyn DocumentStore>,
        state: Arc<UiStateStore>,
    ) -> Self {
        Self { auth, store, state }
    }

    /// Records a mood choice and returns the selector with the chosen
    /// option marked active among its siblings.
    ///
    /// The home-page and mood-page selectors are functionally identical;
    /// `scope` only tells the renderer which group to redraw.
    pub async fn select(
        &self,
        scope: SelectorScope,
        label: &str,
        emoji: &str,
    ) -> Result<MoodSelectorView> {
        self.state.select_mood(label, emoji).await?;
        Ok(MoodSelectorView::with_selection(scope, label))
    }

    /// The selector reflecting the current UI-state selection.
    pub async fn selector(&self, scope: SelectorScope) -> MoodSelectorView {
        let state = self.state.snapshot().await;
        MoodSelectorView::with_selection(scope, &state.selected_mood)
    }

    /// Saves a mood entry with the current selection.
    ///
    /// The entry insert and the profile counter increment are committed as
    /// one atomic batch. On success the caller clears the note input and
    /// reloads the visible history.
    pub async fn save_entry(&self, note: &str) -> Result<Notice> {
        let state = self.state.snapshot().await;
        if state.selected_mood.is_empty() {
            return Err(MindwellError::validation("Please select a mood"));
        }

        let session = self.auth.require_session().await?;
        let entry = MoodEntry::new(
            &state.selected_mood,
            &state.selected_mood_emoji,
            note,
            &session.user_id,
        );

        let batch = WriteBatch::new()
            .insert(collections::MOOD_ENTRIES, serde_json::to_value(&entry)?)
            .increment(collections::USERS, &session.user_id, COUNTER_MOOD, 1);

        match self.store.commit(batch).await {
            Ok(()) => Ok(Notice::success("Mood saved successfully!")),
            Err(e) => {
                tracing::error!("[Mood] Failed to save entry: {}", e);
                Err(MindwellError::backend("Error saving mood. Please try again."))
            }
        }
    }

    /// The 10 most recent entries for the current user, newest first.
    pub async fn load_history(&self) -> ListView<MoodRow> {
        let Some(session) = self.auth.current_session().await else {
            tracing::warn!("[Mood] History requested without a session");
            return ListView::Error;
        };

        let docs = match self
            .store
            .query_owned(collections::MOOD_ENTRIES, &session.user_id, HISTORY_PAGE_SIZE)
            .await
        {
            Ok(docs) => docs,
            Err(e) => {
                tracing::error!("[Mood] Failed to load history: {}", e);
                return ListView::Error;
            }
        };

        let entries: Vec<MoodEntry> = match docs.iter().map(|doc| doc.parse()).collect() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("[Mood] Malformed history entry: {}", e);
                return ListView::Error;
            }
        };

        rows(&entries, Utc::now())
    }
}

/// Renders entries into history rows relative to `now`.
fn rows(entries: &[MoodEntry], now: DateTime<Utc>) -> ListView<MoodRow> {
    if entries.is_empty() {
        return ListView::Empty;
    }

    ListView::Rows(
        entries
            .iter()
            .map(|entry| MoodRow {
                emoji: entry.emoji.clone(),
                title: format!("{} Mood", capitalize(&entry.mood)),
                timestamp: format_relative(entry.created_at, now),
                note: if entry.note.trim().is_empty() {
                    NO_NOTE.to_string()
                } else {
                    entry.note.clone()
                },
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeAuthBackend, FakeDocumentStore, MemoryCredentialStore,
        MemoryStateRepository};
    use mindwell_core::auth::TokenCell;
    use mindwell_core::profile::ProfileAggregate;

    struct Fixture {
        service: MoodService,
        auth: Arc<AuthGateway>,
        store: Arc<FakeDocumentStore>,
        state: Arc<UiStateStore>,
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

        let state = Arc::new(UiStateStore::new(Arc::new(MemoryStateRepository::default())));
        let service = MoodService::new(auth.clone(), store.clone(), state.clone());
        Fixture {
            service,
            auth,
            store,
            state,
        }
    }

    #[tokio::test]
    async fn test_select_marks_exactly_one_active() {
        let f = signed_in_fixture().await;
        let view = f
            .service
            .select(SelectorScope::Home, "happy", "😄")
            .await
            .unwrap();
        assert_eq!(view.active_count(), 1);

        // The mood-page selector reflects the same stored selection
        // independently of the home-page group.
        let other = f.service.selector(SelectorScope::MoodPage).await;
        assert_eq!(other.active_count(), 1);
        assert_eq!(other.scope, SelectorScope::MoodPage);
    }

    #[tokio::test]
    async fn test_save_without_selection_issues_no_backend_call() {
        let f = signed_in_fixture().await;
        let writes_before = f.store.write_count();
        f.state.select_mood("", "").await.unwrap();

        let err = f.service.save_entry("a note").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please select a mood");
        assert_eq!(f.store.write_count(), writes_before);
    }

    #[tokio::test]
    async fn test_save_then_history_shows_row() {
        let f = signed_in_fixture().await;
        f.service
            .select(SelectorScope::Home, "happy", "😄")
            .await
            .unwrap();

        let notice = f.service.save_entry("").await.unwrap();
        assert_eq!(notice.text, "Mood saved successfully!");

        let rows = match f.service.load_history().await {
            ListView::Rows(rows) => rows,
            other => panic!("expected rows, got {other:?}"),
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Happy Mood");
        assert_eq!(rows[0].emoji, "😄");
        assert_eq!(rows[0].note, "No additional notes");
        assert_eq!(rows[0].timestamp, "Just now");
    }

    #[tokio::test]
    async fn test_save_increments_profile_counter_atomically() {
        let f = signed_in_fixture().await;
        let session = f.auth.current_session().await.unwrap();
        f.service
            .select(SelectorScope::MoodPage, "sad", "😢")
            .await
            .unwrap();

        f.service.save_entry("rough day").await.unwrap();
        f.service.save_entry("better now").await.unwrap();

        let doc = f
            .store
            .get(collections::USERS, &session.user_id)
            .await
            .unwrap()
            .unwrap();
        let profile: ProfileAggregate = doc.parse().unwrap();
        assert_eq!(profile.mood_entries, 2);
        assert_eq!(f.store.count_documents(collections::MOOD_ENTRIES), 2);
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_entry_and_counter_unapplied() {
        let f = signed_in_fixture().await;
        let session = f.auth.current_session().await.unwrap();
        f.service
            .select(SelectorScope::Home, "happy", "😄")
            .await
            .unwrap();

        f.store.fail_next_commit();
        let err = f.service.save_entry("note").await.unwrap_err();
        assert!(err.is_backend());
        assert_eq!(err.to_string(), "Error saving mood. Please try again.");

        assert_eq!(f.store.count_documents(collections::MOOD_ENTRIES), 0);
        let doc = f
            .store
            .get(collections::USERS, &session.user_id)
            .await
            .unwrap()
            .unwrap();
        let profile: ProfileAggregate = doc.parse().unwrap();
        assert_eq!(profile.mood_entries, 0);
    }

    #[tokio::test]
    async fn test_empty_history_renders_placeholder() {
        let f = signed_in_fixture().await;
        assert_eq!(f.service.load_history().await, ListView::Empty);
    }

    #[tokio::test]
    async fn test_blank_note_gets_placeholder_text() {
        let entry = MoodEntry::new("happy", "😄", "   ", "u-1");
        let view = rows(&[entry], Utc::now());
        let ListView::Rows(rows) = view else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].note, "No additional notes");
    }
}
