//! Provider configuration from TOML (`[provider]` section)

use crate::providers::mistral::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, MistralClient};
use serde::{Deserialize, Serialize};
use slr_application::ModelClientError;
use std::time::Duration;

/// Mistral API connection settings
///
/// # Example
///
/// ```toml
/// [provider]
/// api_key_env = "MISTRAL_API_KEY"
/// base_url = "https://api.mistral.ai/v1"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable the API key is read from
    pub api_key_env: String,
    /// Inline API key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    /// API root, without the `/chat/completions` suffix
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileProviderConfig {
    /// Inline key if set, otherwise the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
    }

    /// Build the model client described by this section.
    pub fn build_client(&self) -> Result<MistralClient, ModelClientError> {
        MistralClient::new(self.resolve_api_key())
            .with_api_key_env(self.api_key_env.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
