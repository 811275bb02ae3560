//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application parameters.

mod logging;
mod pipelines;
mod provider;

pub use logging::FileLoggingConfig;
pub use pipelines::{FileQueryConfig, FileQuestionsConfig};
pub use provider::FileProviderConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{section}.model: model name cannot be empty")]
    EmptyModelName { section: &'static str },

    #[error("{section}.temperature: must be between 0 and 2, got {value}")]
    TemperatureOutOfRange { section: &'static str, value: f32 },

    #[error("{section}.max_tokens cannot be 0")]
    ZeroMaxTokens { section: &'static str },

    #[error("questions.max_questions cannot be 0")]
    ZeroMaxQuestions,

    #[error("provider.timeout_secs cannot be 0")]
    ZeroTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model provider connection
    pub provider: FileProviderConfig,
    /// Clarifying-question pipeline
    pub questions: FileQuestionsConfig,
    /// Structured-query pipeline
    pub query: FileQueryConfig,
    /// Exchange transcript
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.provider.timeout_secs == 0 {
            issues.push(ConfigValidationError::ZeroTimeout);
        }
        issues.extend(self.questions.validate());
        issues.extend(self.query.validate());
        issues
    }
}
