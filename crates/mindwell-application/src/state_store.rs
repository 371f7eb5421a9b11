//! UI State Store use case.
//!
//! Owns the single mutable UI-state record through the repository port.
//! Every mutator writes the whole snapshot through, keeping the durable copy
//! at most one mutation stale.

use std::sync::Arc;

use mindwell_core::error::Result;
use mindwell_core::state::{StateRepository, UiState};

use crate::view::ThemeView;

#[derive(Clone)]
pub struct UiStateStore {
    repository: Arc<dyn StateRepository>,
}

impl UiStateStore {
    pub fn new(repository: Arc<dyn StateRepository>) -> Self {
        Self { repository }
    }

    pub async fn snapshot(&self) -> UiState {
        self.repository.get_state().await
    }

    /// Records the active page.
    pub async fn set_current_page(&self, id: &str) -> Result<()> {
        self.mutate(|state| state.current_page = id.to_string())
            .await?;
        Ok(())
    }

    /// Flips the theme flag and reports the mirrored affordances.
    pub async fn toggle_theme(&self) -> Result<ThemeView> {
        let state = self.mutate(|state| state.dark_mode = !state.dark_mode).await?;
        Ok(ThemeView::for_mode(state.dark_mode))
    }

    /// Records the in-progress mood selection.
    pub async fn select_mood(&self, label: &str, emoji: &str) -> Result<()> {
        self.mutate(|state| {
            state.selected_mood = label.to_string();
            state.selected_mood_emoji = emoji.to_string();
        })
        .await?;
        Ok(())
    }

    async fn mutate<F>(&self, f: F) -> Result<UiState>
    where
        F: FnOnce(&mut UiState),
    {
        let mut state = self.repository.get_state().await;
        f(&mut state);
        self.repository.save_state(state.clone()).await?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStateRepository;

    fn store() -> (UiStateStore, Arc<MemoryStateRepository>) {
        let repository = Arc::new(MemoryStateRepository::default());
        (UiStateStore::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn test_every_mutation_persists() {
        let (store, repository) = store();

        store.set_current_page("moodPage").await.unwrap();
        store.select_mood("happy", "😄").await.unwrap();
        store.toggle_theme().await.unwrap();

        assert_eq!(repository.save_count(), 3);
        // Durable copy equals the in-memory record after each mutation.
        assert_eq!(repository.persisted().await, store.snapshot().await);
    }

    #[tokio::test]
    async fn test_toggle_theme_flips_and_mirrors() {
        let (store, _) = store();

        let on = store.toggle_theme().await.unwrap();
        assert!(on.dark_mode);
        assert_eq!(on.icon, "sun");
        assert!(on.checkbox_checked);

        let off = store.toggle_theme().await.unwrap();
        assert!(!off.dark_mode);
        assert_eq!(off.icon, "moon");
        assert!(!off.checkbox_checked);
    }

    #[tokio::test]
    async fn test_select_mood_updates_both_fields() {
        let (store, _) = store();
        store.select_mood("sad", "😢").await.unwrap();

        let state = store.snapshot().await;
        assert_eq!(state.selected_mood, "sad");
        assert_eq!(state.selected_mood_emoji, "😢");
    }
}
