//! Configuration service implementation.
//!
//! Loads the root configuration from the configuration file
//! (`~/.config/mindwell/config.toml`) and caches it.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use mindwell_core::config::RootConfig;

use crate::paths::MindwellPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration. Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading from the default platform location.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading from an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing or unreadable file degrades to defaults; a parse failure is
    /// logged and also degrades to defaults.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!("[Config] Falling back to defaults: {}", e);
            RootConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Result<RootConfig, String> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => MindwellPaths::config_file().map_err(|e| e.to_string())?,
        };

        if !path.exists() {
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file at {:?}: {}", path, e))?;

        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        toml::from_str(&content).map_err(|e| format!("Failed to parse {:?}: {}", path, e))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_defaults() {
        let service = ConfigService::at(PathBuf::from("/nonexistent/config.toml"));
        assert_eq!(service.get_config(), RootConfig::default());
    }

    #[test]
    fn test_loads_and_caches_backend_section() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[backend]\nbase_url = \"https://x.test\"").unwrap();

        let service = ConfigService::at(file.path().to_path_buf());
        let config = service.get_config();
        assert_eq!(config.backend.base_url.as_deref(), Some("https://x.test"));

        // Cached copy survives the file going away until invalidated.
        drop(file);
        assert_eq!(
            service.get_config().backend.base_url.as_deref(),
            Some("https://x.test")
        );
    }

    #[test]
    fn test_invalid_toml_degrades_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not [valid toml").unwrap();

        let service = ConfigService::at(file.path().to_path_buf());
        assert_eq!(service.get_config(), RootConfig::default());
    }
}
