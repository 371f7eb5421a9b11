//! Backend endpoint configuration.

use std::env;

use mindwell_core::config::BackendSettings;

const DEFAULT_BASE_URL: &str = "https://api.mindwell.app";

/// Resolved backend configuration.
///
/// Resolution priority per field:
/// 1. `config.toml` (`[backend]` section)
/// 2. Environment variables (`MINDWELL_BASE_URL`, `MINDWELL_API_KEY`)
/// 3. Built-in default (base URL only; the API key stays unset)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            api_key,
        }
    }

    /// Resolves the configuration from the config file settings with
    /// environment fallbacks.
    pub fn resolve(settings: &BackendSettings) -> Self {
        let base_url = settings
            .base_url
            .clone()
            .or_else(|| env::var("MINDWELL_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = settings
            .api_key
            .clone()
            .or_else(|| env::var("MINDWELL_API_KEY").ok());

        tracing::info!(
            "[Backend] Resolved base URL: {}, API key: {}",
            base_url,
            if api_key.is_some() { "present" } else { "none" }
        );

        Self::new(base_url, api_key)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
