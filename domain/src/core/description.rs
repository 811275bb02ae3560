//! Research description value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Free-text description of the research need (Value Object)
///
/// The starting point of both pipelines: the reviewer's own words about
/// the device, population and outcomes they care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchDescription {
    content: String,
}

impl ResearchDescription {
    /// Validate and wrap a description.
    ///
    /// An empty string is a missing description; a whitespace-only string is
    /// a blank one. The content is kept as given otherwise.
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::MissingDescription);
        }
        if content.trim().is_empty() {
            return Err(DomainError::BlankDescription);
        }
        Ok(Self { content })
    }

    /// Get the description content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for ResearchDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
