//! Mistral model client
//!
//! Implements the [`ModelClient`] port over the Mistral chat-completions
//! HTTP API. The API key is resolved once at construction; a missing key is
//! reported on the first request so that the failure reaches the caller as
//! a normal envelope rather than a startup error.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, convert_reqwest_error};
use async_trait::async_trait;
use slr_application::{ModelClient, ModelClientError};
use slr_domain::GenerationParams;
use slr_domain::util::truncate_str;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Mistral API root.
pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Environment variable holding the API key by default.
pub const DEFAULT_API_KEY_ENV: &str = "MISTRAL_API_KEY";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct MistralClient {
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl MistralClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Read the key from an environment variable.
    pub fn from_env(var: &str) -> Self {
        Self::new(std::env::var(var).ok()).with_api_key_env(var)
    }

    /// Name reported when no key is available.
    pub fn with_api_key_env(mut self, var: impl Into<String>) -> Self {
        self.api_key_env = var.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Rebuild the HTTP client with a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ModelClientError> {
        self.http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelClientError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ModelClient for MistralClient {
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ModelClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ModelClientError::MissingApiKey(self.api_key_env.clone()))?;

        let request = ChatCompletionRequest::from_params(prompt, params);
        debug!(model = %params.model, endpoint = %self.endpoint(), "Sending chat completion");

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(convert_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Mistral API error ({}): {}",
                status,
                truncate_str(&body, 200)
            );
            return Err(ModelClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(convert_reqwest_error)?;
        completion.into_completion()
    }
}
