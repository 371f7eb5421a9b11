//! Unified path management for Mindwell's local files.
//!
//! All durable client-side files live under the platform config directory:
//!
//! ```text
//! ~/.config/mindwell/          # Linux (platform-appropriate elsewhere)
//! ├── config.toml              # Backend endpoint configuration
//! ├── state.json               # Durable UI-state snapshot
//! └── credentials.json         # Stored refresh token (0600)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for mindwell_core::MindwellError {
    fn from(err: PathError) -> Self {
        mindwell_core::MindwellError::config(err.to_string())
    }
}

/// Unified path management for Mindwell.
pub struct MindwellPaths;

impl MindwellPaths {
    /// Returns the mindwell configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("mindwell"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the durable UI-state snapshot.
    pub fn state_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("state.json"))
    }

    /// Returns the path to the stored credentials.
    ///
    /// The credential store sets this file to mode 600 on Unix.
    pub fn credentials_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("credentials.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        // dirs::config_dir is None only on unsupported platforms.
        if let Ok(dir) = MindwellPaths::config_dir() {
            assert!(MindwellPaths::config_file().unwrap().starts_with(&dir));
            assert!(MindwellPaths::state_file().unwrap().starts_with(&dir));
            assert!(MindwellPaths::credentials_file().unwrap().starts_with(&dir));
        }
    }
}
