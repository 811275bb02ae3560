//! Wire types for the Mistral chat-completions API
//!
//! Converts domain [`GenerationParams`] into the request body and the
//! response body back into completion text.

use slr_application::ModelClientError;
use slr_domain::{GenerationParams, ResponseFormat};
use serde::{Deserialize, Serialize};

// ─── Domain → Mistral ────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormatBody>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormatBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Single-turn request carrying the whole prompt as the user message.
    pub fn from_params(prompt: &'a str, params: &'a GenerationParams) -> Self {
        Self {
            model: params.model.as_str(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            random_seed: params.seed,
            // Plain text is the API default; only JSON mode is sent explicitly.
            response_format: match params.response_format {
                Some(ResponseFormat::JsonObject) => Some(ResponseFormatBody {
                    kind: ResponseFormat::JsonObject.as_str(),
                }),
                Some(ResponseFormat::Text) | None => None,
            },
        }
    }
}

// ─── Mistral → Domain ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice. A null content counts as an empty completion.
    pub fn into_completion(self) -> Result<String, ModelClientError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(ModelClientError::NoChoices)
    }
}

/// Map a reqwest failure onto the port's error type.
pub(crate) fn convert_reqwest_error(error: reqwest::Error) -> ModelClientError {
    if error.is_timeout() {
        ModelClientError::Timeout
    } else if error.is_decode() {
        ModelClientError::InvalidResponse(error.to_string())
    } else {
        ModelClientError::Connection(error.to_string())
    }
}
