//! Per-pipeline parameters.
//!
//! These are application-layer concerns: how each pipeline calls the model
//! and post-processes its output. The domain parsers themselves take no
//! configuration beyond the decoder's strategy chain.

use serde::{Deserialize, Serialize};
use slr_domain::{GenerationParams, QueryStructureDecoder};

/// Parameters for the clarifying-question pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionsParams {
    pub generation: GenerationParams,
    /// Hard cap on returned questions. `None` keeps every extracted question.
    pub max_questions: Option<usize>,
}

impl Default for QuestionsParams {
    fn default() -> Self {
        Self {
            generation: GenerationParams::for_questions(),
            max_questions: None,
        }
    }
}

impl QuestionsParams {
    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_max_questions(mut self, max: Option<usize>) -> Self {
        self.max_questions = max;
        self
    }
}

/// Parameters for the structured-query pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    pub generation: GenerationParams,
    /// Accept JSON wrapped in a Markdown code fence before falling back.
    pub accept_fenced_json: bool,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            generation: GenerationParams::for_query(),
            accept_fenced_json: false,
        }
    }
}

impl QueryParams {
    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_fenced_json(mut self, accept: bool) -> Self {
        self.accept_fenced_json = accept;
        self
    }

    /// Build the decoder matching these parameters.
    pub fn decoder(&self) -> QueryStructureDecoder {
        let decoder = QueryStructureDecoder::new();
        if self.accept_fenced_json {
            decoder.with_fenced_json()
        } else {
            decoder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_defaults() {
        let params = QuestionsParams::default();
        assert_eq!(params.generation, GenerationParams::for_questions());
        assert!(params.max_questions.is_none());
    }

    #[test]
    fn test_query_decoder_chain() {
        assert_eq!(
            QueryParams::default().decoder().strategy_names(),
            vec!["strict_json", "boolean_split"]
        );
        assert_eq!(
            QueryParams::default()
                .with_fenced_json(true)
                .decoder()
                .strategy_names(),
            vec!["strict_json", "fenced_json", "boolean_split"]
        );
    }
}
