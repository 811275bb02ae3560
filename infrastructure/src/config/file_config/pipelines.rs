//! Per-pipeline configuration from TOML (`[questions]` and `[query]` sections)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use slr_application::{QueryParams, QuestionsParams};
use slr_domain::{GenerationParams, Model, ResponseFormat};

/// Clarifying-question pipeline settings
///
/// # Example
///
/// ```toml
/// [questions]
/// model = "open-mistral-7b"
/// temperature = 0.5
/// max_tokens = 500
/// seed = 0
/// max_questions = 5   # unset keeps every question
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub seed: Option<u64>,
    /// Truncate the extracted list to this many questions
    pub max_questions: Option<usize>,
}

impl Default for FileQuestionsConfig {
    fn default() -> Self {
        let defaults = QuestionsParams::default();
        Self {
            model: defaults.generation.model.to_string(),
            temperature: defaults.generation.temperature,
            max_tokens: defaults.generation.max_tokens,
            seed: defaults.generation.seed,
            max_questions: defaults.max_questions,
        }
    }
}

impl FileQuestionsConfig {
    pub fn to_params(&self) -> QuestionsParams {
        QuestionsParams::default()
            .with_generation(
                GenerationParams::new(Model::from(self.model.trim()))
                    .with_temperature(self.temperature)
                    .with_max_tokens(self.max_tokens)
                    .with_seed(self.seed),
            )
            .with_max_questions(self.max_questions)
    }

    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues =
            validate_generation("questions", &self.model, self.temperature, self.max_tokens);
        if self.max_questions == Some(0) {
            issues.push(ConfigValidationError::ZeroMaxQuestions);
        }
        issues
    }
}

/// Structured-query pipeline settings
///
/// # Example
///
/// ```toml
/// [query]
/// model = "mistral-large-latest"
/// temperature = 0.0
/// max_tokens = 1000
/// json_response_format = true
/// accept_fenced_json = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub seed: Option<u64>,
    /// Ask the provider for a JSON object response
    pub json_response_format: bool,
    /// Try JSON inside a Markdown code fence before the boolean fallback
    pub accept_fenced_json: bool,
}

impl Default for FileQueryConfig {
    fn default() -> Self {
        let defaults = QueryParams::default();
        Self {
            model: defaults.generation.model.to_string(),
            temperature: defaults.generation.temperature,
            max_tokens: defaults.generation.max_tokens,
            seed: defaults.generation.seed,
            json_response_format: defaults.generation.response_format
                == Some(ResponseFormat::JsonObject),
            accept_fenced_json: defaults.accept_fenced_json,
        }
    }
}

impl FileQueryConfig {
    pub fn to_params(&self) -> QueryParams {
        let response_format = self
            .json_response_format
            .then_some(ResponseFormat::JsonObject);
        QueryParams::default()
            .with_generation(
                GenerationParams::new(Model::from(self.model.trim()))
                    .with_temperature(self.temperature)
                    .with_max_tokens(self.max_tokens)
                    .with_seed(self.seed)
                    .with_response_format(response_format),
            )
            .with_fenced_json(self.accept_fenced_json)
    }

    pub fn validate(&self) -> Vec<ConfigValidationError> {
        validate_generation("query", &self.model, self.temperature, self.max_tokens)
    }
}

fn validate_generation(
    section: &'static str,
    model: &str,
    temperature: f32,
    max_tokens: u32,
) -> Vec<ConfigValidationError> {
    let mut issues = Vec::new();
    if model.trim().is_empty() {
        issues.push(ConfigValidationError::EmptyModelName { section });
    }
    if !(0.0..=2.0).contains(&temperature) {
        issues.push(ConfigValidationError::TemperatureOutOfRange {
            section,
            value: temperature,
        });
    }
    if max_tokens == 0 {
        issues.push(ConfigValidationError::ZeroMaxTokens { section });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pipeline_params() {
        assert_eq!(FileQuestionsConfig::default().to_params(), QuestionsParams::default());
        assert_eq!(FileQueryConfig::default().to_params(), QueryParams::default());
    }

    #[test]
    fn test_json_mode_can_be_disabled() {
        let config = FileQueryConfig {
            json_response_format: false,
            ..Default::default()
        };
        assert_eq!(config.to_params().generation.response_format, None);
    }

    #[test]
    fn test_unknown_model_becomes_custom() {
        let config = FileQuestionsConfig {
            model: "ministral-8b-latest".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.to_params().generation.model,
            Model::Custom("ministral-8b-latest".to_string())
        );
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let config = FileQuestionsConfig {
            model: " ".to_string(),
            temperature: 3.5,
            max_tokens: 0,
            max_questions: Some(0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::EmptyModelName { section: "questions" },
                ConfigValidationError::TemperatureOutOfRange {
                    section: "questions",
                    value: 3.5
                },
                ConfigValidationError::ZeroMaxTokens { section: "questions" },
                ConfigValidationError::ZeroMaxQuestions,
            ]
        );
    }
}
