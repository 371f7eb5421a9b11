//! Durable UI-state repository.
//!
//! Caches the UI-state record in memory and writes the whole snapshot
//! through to disk on every save, so the durable copy trails the in-memory
//! record by at most one mutation.

use std::path::PathBuf;
use std::sync::Arc;

use mindwell_core::error::{MindwellError, Result};
use mindwell_core::state::{StateRepository, UiState};
use tokio::sync::Mutex;

use crate::atomic_json::AtomicJsonFile;
use crate::paths::MindwellPaths;

#[derive(Clone)]
pub struct FileStateRepository {
    /// Cached UI state loaded from storage.
    state: Arc<Mutex<UiState>>,
    file: Arc<AtomicJsonFile<UiState>>,
}

impl FileStateRepository {
    /// Opens the repository at the default platform location.
    pub fn new() -> Result<Self> {
        Ok(Self::at(MindwellPaths::state_file()?))
    }

    /// Opens the repository at an explicit path (used by tests).
    pub fn at(path: PathBuf) -> Self {
        let file = AtomicJsonFile::<UiState>::new(path);

        // An unreadable or corrupt snapshot degrades to defaults; serde
        // field defaults give the shallow-merge semantics for snapshots
        // written by older builds.
        let initial = match file.load() {
            Ok(Some(state)) => state,
            Ok(None) => UiState::default(),
            Err(e) => {
                tracing::warn!("[UiState] Discarding unreadable snapshot: {}", e);
                UiState::default()
            }
        };

        Self {
            state: Arc::new(Mutex::new(initial)),
            file: Arc::new(file),
        }
    }
}

#[async_trait::async_trait]
impl StateRepository for FileStateRepository {
    async fn get_state(&self) -> UiState {
        self.state.lock().await.clone()
    }

    async fn save_state(&self, state: UiState) -> Result<()> {
        {
            let mut cached = self.state.lock().await;
            *cached = state.clone();
        }

        // File write happens off the async executor.
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.save(&state))
            .await
            .map_err(|e| MindwellError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_defaults_when_no_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStateRepository::at(temp_dir.path().join("state.json"));
        assert_eq!(repo.get_state().await, UiState::default());
    }

    #[tokio::test]
    async fn test_save_then_reload_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let repo = FileStateRepository::at(path.clone());
        let mut state = repo.get_state().await;
        state.dark_mode = true;
        state.current_page = "journalPage".to_string();
        repo.save_state(state.clone()).await.unwrap();

        // A fresh repository sees exactly the persisted record.
        let reloaded = FileStateRepository::at(path);
        assert_eq!(reloaded.get_state().await, state);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_degrades_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();

        let repo = FileStateRepository::at(path);
        assert_eq!(repo.get_state().await, UiState::default());
    }

    #[tokio::test]
    async fn test_older_snapshot_shallow_merges() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, r#"{"darkMode": true}"#).unwrap();

        let repo = FileStateRepository::at(path);
        let state = repo.get_state().await;
        assert!(state.dark_mode);
        assert_eq!(state.selected_mood, "neutral");
    }
}
