//! Model client port
//!
//! Defines the interface for obtaining one text completion from a
//! text-generation provider.

use async_trait::async_trait;
use slr_domain::GenerationParams;
use thiserror::Error;

/// Errors that can occur while requesting a completion.
///
/// Every variant is a transport or configuration failure; a completion
/// that arrives but is malformed is not an error at this level.
#[derive(Error, Debug)]
pub enum ModelClientError {
    #[error("{0} environment variable not set.")]
    MissingApiKey(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("No response generated")]
    NoChoices,

    #[error("Other error: {0}")]
    Other(String),
}

impl ModelClientError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ModelClientError::Connection(_) | ModelClientError::Timeout => true,
            ModelClientError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Client for a text-generation model.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one prompt and return the completion text.
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ModelClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let e = ModelClientError::MissingApiKey("MISTRAL_API_KEY".to_string());
        assert_eq!(e.to_string(), "MISTRAL_API_KEY environment variable not set.");
    }

    #[test]
    fn test_transient_classification() {
        assert!(ModelClientError::Timeout.is_transient());
        assert!(
            ModelClientError::Status {
                status: 503,
                body: String::new()
            }
            .is_transient()
        );
        assert!(
            !ModelClientError::Status {
                status: 401,
                body: String::new()
            }
            .is_transient()
        );
        assert!(!ModelClientError::MissingApiKey("K".to_string()).is_transient());
    }
}
