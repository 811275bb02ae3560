//! Generate Query use case.
//!
//! Turns a research description plus the reviewer's answers into a
//! structured PubMed query:
//! 1. Validate the description
//! 2. Build the prompt from [`PromptTemplate::pubmed_query`]
//! 3. Request one completion (JSON mode by default)
//! 4. Decode with [`QueryStructureDecoder`], which always yields a structure
//!
//! Only a failed model call (or an invalid description) produces a
//! failure envelope; its fallback is the "Error generating query" placeholder.

use crate::config::QueryParams;
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::model_client::ModelClient;
use crate::use_cases::shared::request_completion;
use serde_json::json;
use slr_domain::util::truncate_str;
use slr_domain::{
    Answers, DecodeSource, PromptTemplate, QueryStructure, QueryStructureDecoder,
    ResearchDescription, ResponseEnvelope,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`GenerateQueryUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateQueryInput {
    /// Free-text research description, unvalidated.
    pub description: String,
    /// Answers to the clarifying questions (may be empty).
    pub answers: Answers,
}

impl GenerateQueryInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            answers: Answers::new(),
        }
    }

    pub fn with_answers(mut self, answers: Answers) -> Self {
        self.answers = answers;
        self
    }
}

/// Output of the [`GenerateQueryUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateQueryOutput {
    /// What the caller serializes.
    pub envelope: ResponseEnvelope<QueryStructure>,
    /// Which decoding path produced the structure; `None` on failure.
    pub source: Option<DecodeSource>,
}

impl GenerateQueryOutput {
    fn failure(error: impl Into<String>) -> Self {
        Self {
            envelope: ResponseEnvelope::failure(
                error,
                QueryStructure::generation_error_placeholder(),
            ),
            source: None,
        }
    }

    /// True when the structure came from a fallback path.
    pub fn is_degraded(&self) -> bool {
        self.source.is_some_and(|s| s.degraded)
    }
}

/// Use case for generating a structured search query.
pub struct GenerateQueryUseCase {
    client: Arc<dyn ModelClient>,
    params: QueryParams,
    decoder: QueryStructureDecoder,
    exchange_logger: Arc<dyn ExchangeLogger>,
}

impl GenerateQueryUseCase {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        let params = QueryParams::default();
        Self {
            client,
            decoder: params.decoder(),
            params,
            exchange_logger: Arc::new(NoExchangeLogger),
        }
    }

    /// Replace the parameters; the decoder is rebuilt to match.
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.decoder = params.decoder();
        self.params = params;
        self
    }

    /// Use a custom decoder (e.g. an extra strategy ahead of the fallback).
    pub fn with_decoder(mut self, decoder: QueryStructureDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Create with an exchange logger.
    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.exchange_logger = logger;
        self
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Execute the pipeline.
    pub async fn execute(&self, input: GenerateQueryInput) -> GenerateQueryOutput {
        let description = match ResearchDescription::try_new(input.description) {
            Ok(d) => d,
            Err(e) => {
                warn!("Rejected query request: {}", e);
                return GenerateQueryOutput::failure(e.to_string());
            }
        };

        info!(
            "Generating PubMed query for: {} ({} answers)",
            truncate_str(description.content(), 100),
            input.answers.len()
        );

        let prompt = PromptTemplate::pubmed_query(&description, &input.answers);
        let completion = match request_completion(
            self.client.as_ref(),
            self.exchange_logger.as_ref(),
            "query",
            &prompt,
            &self.params.generation,
        )
        .await
        {
            Ok(text) => text,
            Err(e) => return GenerateQueryOutput::failure(e.to_string()),
        };

        let decoded = self.decoder.parse(&completion);
        if decoded.is_degraded() {
            warn!(
                "Completion did not match the query schema; decoded via {}",
                decoded.source.strategy
            );
        }
        info!(
            "Decoded {} subqueries via {}",
            decoded.structure.len(),
            decoded.source.strategy
        );

        self.exchange_logger.log(ExchangeEvent::new(
            "structure_decoded",
            json!({
                "pipeline": "query",
                "strategy": decoded.source.strategy,
                "degraded": decoded.source.degraded,
                "subqueries": decoded.structure.len(),
            }),
        ));

        GenerateQueryOutput {
            source: Some(decoded.source),
            envelope: ResponseEnvelope::success(decoded.structure),
        }
    }
}
