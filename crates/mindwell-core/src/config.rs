//! Application configuration model.

use serde::{Deserialize, Serialize};

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub backend: BackendSettings,
}

/// Settings for the hosted backend (auth service + document database).
///
/// All fields are optional here; the backend crate resolves them against
/// environment variables and built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Base URL shared by the auth service and document database.
    pub base_url: Option<String>,
    /// Project API key sent with every request.
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
    }

    #[test]
    fn test_backend_section() {
        let config: RootConfig = toml::from_str(
            r#"
[backend]
base_url = "https://api.example.test"
api_key = "k-123"
"#,
        )
        .unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("https://api.example.test")
        );
        assert_eq!(config.backend.api_key.as_deref(), Some("k-123"));
    }
}
