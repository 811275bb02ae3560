//! Generation parameters passed alongside a prompt to the model client

use super::model::Model;
use serde::{Deserialize, Serialize};

/// Output format requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text (provider default).
    #[default]
    Text,
    /// Provider-side JSON mode: the completion is constrained to a JSON object.
    JsonObject,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Text => "text",
            ResponseFormat::JsonObject => "json_object",
        }
    }
}

/// Parameters for a single completion request.
///
/// Built by the use cases; the model client translates them into its
/// provider's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: Model,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Sampling seed, forwarded as the provider's random seed when set.
    pub seed: Option<u64>,
    /// `None` leaves the provider default in place.
    pub response_format: Option<ResponseFormat>,
}

impl GenerationParams {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            temperature: 0.0,
            max_tokens: 1000,
            seed: None,
            response_format: None,
        }
    }

    /// Defaults for clarifying-question generation.
    pub fn for_questions() -> Self {
        Self::new(Model::default_questions())
            .with_temperature(0.5)
            .with_max_tokens(500)
            .with_seed(Some(0))
    }

    /// Defaults for structured query generation (JSON mode, deterministic).
    pub fn for_query() -> Self {
        Self::new(Model::default_query())
            .with_temperature(0.0)
            .with_max_tokens(1000)
            .with_seed(Some(0))
            .with_response_format(Some(ResponseFormat::JsonObject))
    }

    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_response_format(mut self, format: Option<ResponseFormat>) -> Self {
        self.response_format = format;
        self
    }
}
