//! Model value object representing a text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text-generation models known to the pipelines (Value Object)
///
/// The question pipeline defaults to a small, fast model; the query
/// pipeline defaults to the large model because it must follow a JSON
/// output contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenMistral7b,
    MistralSmallLatest,
    MistralLargeLatest,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::OpenMistral7b => "open-mistral-7b",
            Model::MistralSmallLatest => "mistral-small-latest",
            Model::MistralLargeLatest => "mistral-large-latest",
            Model::Custom(s) => s,
        }
    }

    /// Default model for clarifying-question generation
    pub fn default_questions() -> Self {
        Model::OpenMistral7b
    }

    /// Default model for structured query generation
    pub fn default_query() -> Self {
        Model::MistralLargeLatest
    }

    /// Whether the identifier is blank (only possible for `Custom`)
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl Default for Model {
    /// Returns the default model (mistral-large-latest)
    fn default() -> Self {
        Model::MistralLargeLatest
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "open-mistral-7b" => Model::OpenMistral7b,
            "mistral-small-latest" => Model::MistralSmallLatest,
            "mistral-large-latest" => Model::MistralLargeLatest,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
