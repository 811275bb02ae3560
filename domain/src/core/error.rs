//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while validating pipeline inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query is required")]
    MissingDescription,

    #[error("Query cannot be empty")]
    BlankDescription,

    #[error("Answers must be a valid JSON string.")]
    InvalidAnswers,
}

impl DomainError {
    /// Check if this error was caused by the research description
    pub fn is_description_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingDescription | DomainError::BlankDescription
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomainError::MissingDescription.to_string(), "Query is required");
        assert_eq!(DomainError::BlankDescription.to_string(), "Query cannot be empty");
        assert_eq!(
            DomainError::InvalidAnswers.to_string(),
            "Answers must be a valid JSON string."
        );
    }

    #[test]
    fn test_is_description_error() {
        assert!(DomainError::MissingDescription.is_description_error());
        assert!(DomainError::BlankDescription.is_description_error());
        assert!(!DomainError::InvalidAnswers.is_description_error());
    }
}
