//! Stored refresh token.
//!
//! The refresh token is the only credential persisted between launches; it
//! is what makes session restoration possible. The file is kept at mode 600
//! on Unix.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use mindwell_core::auth::CredentialStore;
use mindwell_core::error::{MindwellError, Result};
use serde::{Deserialize, Serialize};

use crate::atomic_json::AtomicJsonFile;
use crate::paths::MindwellPaths;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredentials {
    refresh_token: String,
}

#[derive(Clone)]
pub struct FileCredentialStore {
    file: Arc<AtomicJsonFile<StoredCredentials>>,
}

impl FileCredentialStore {
    /// Opens the store at the default platform location.
    pub fn new() -> Result<Self> {
        Ok(Self::at(MindwellPaths::credentials_file()?))
    }

    /// Opens the store at an explicit path (used by tests).
    pub fn at(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
        }
    }

    #[cfg(unix)]
    fn restrict_permissions(&self) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(self.file.path(), std::fs::Permissions::from_mode(0o600))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<String>> {
        let file = self.file.clone();
        let stored = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| MindwellError::internal(format!("Failed to join task: {}", e)))??;
        Ok(stored.map(|credentials| credentials.refresh_token))
    }

    async fn save(&self, refresh_token: &str) -> Result<()> {
        let file = self.file.clone();
        let credentials = StoredCredentials {
            refresh_token: refresh_token.to_string(),
        };
        tokio::task::spawn_blocking(move || file.save(&credentials))
            .await
            .map_err(|e| MindwellError::internal(format!("Failed to join task: {}", e)))??;
        self.restrict_permissions()
    }

    async fn clear(&self) -> Result<()> {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.remove())
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
    async fn test_load_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::at(temp_dir.path().join("credentials.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::at(temp_dir.path().join("credentials.json"));

        store.save("rt-1").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("rt-1"));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_credentials_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credentials.json");
        let store = FileCredentialStore::at(path.clone());
        store.save("rt-1").await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
