//! Generate Questions use case.
//!
//! Turns a research description into clarifying questions:
//! 1. Validate the description (no model call for an empty one)
//! 2. Build the prompt from [`PromptTemplate::clarifying_questions`]
//! 3. Request one completion
//! 4. Extract questions with [`QuestionExtractor`]
//! 5. Apply the optional cap
//!
//! Every failure ends up in the returned [`ResponseEnvelope`]; nothing is
//! propagated to the caller as an error.

use crate::config::QuestionsParams;
use crate::ports::exchange_logger::{ExchangeLogger, NoExchangeLogger};
use crate::ports::model_client::ModelClient;
use crate::use_cases::shared::request_completion;
use slr_domain::util::truncate_str;
use slr_domain::{PromptTemplate, QuestionExtractor, QuestionList, ResearchDescription, ResponseEnvelope};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`GenerateQuestionsUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateQuestionsInput {
    /// Free-text research description, unvalidated.
    pub description: String,
}

impl GenerateQuestionsInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Use case for generating clarifying questions.
#[derive(Clone)]
pub struct GenerateQuestionsUseCase {
    client: Arc<dyn ModelClient>,
    params: QuestionsParams,
    exchange_logger: Arc<dyn ExchangeLogger>,
}

impl GenerateQuestionsUseCase {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
            params: QuestionsParams::default(),
            exchange_logger: Arc::new(NoExchangeLogger),
        }
    }

    pub fn with_params(mut self, params: QuestionsParams) -> Self {
        self.params = params;
        self
    }

    /// Create with an exchange logger.
    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.exchange_logger = logger;
        self
    }

    pub fn params(&self) -> &QuestionsParams {
        &self.params
    }

    /// Execute the pipeline.
    pub async fn execute(&self, input: GenerateQuestionsInput) -> ResponseEnvelope<QuestionList> {
        let description = match ResearchDescription::try_new(input.description) {
            Ok(d) => d,
            Err(e) => {
                warn!("Rejected question request: {}", e);
                return ResponseEnvelope::failure(e.to_string(), QuestionList::default());
            }
        };

        info!(
            "Generating clarifying questions for: {}",
            truncate_str(description.content(), 100)
        );

        let prompt = PromptTemplate::clarifying_questions(&description);
        let completion = match request_completion(
            self.client.as_ref(),
            self.exchange_logger.as_ref(),
            "questions",
            &prompt,
            &self.params.generation,
        )
        .await
        {
            Ok(text) => text,
            Err(e) => return ResponseEnvelope::failure(e.to_string(), QuestionList::default()),
        };

        let mut envelope = QuestionExtractor::parse(&completion);

        if let ResponseEnvelope::Success(list) = &mut envelope {
            if list.exceeds_requested_max() {
                warn!(
                    "Model returned {} questions, more than the {} requested",
                    list.len(),
                    QuestionList::REQUESTED_MAX
                );
            }
            if let Some(max) = self.params.max_questions {
                list.truncate(max);
            }
        }

        match envelope.error() {
            Some(e) => warn!("Question extraction failed: {}", e),
            None => info!("Extracted {} clarifying questions", envelope.payload().len()),
        }

        envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_client::ModelClientError;
    use crate::use_cases::test_support::{RecordingLogger, ScriptedClient};
    use serde_json::json;

    fn use_case(client: Arc<ScriptedClient>) -> GenerateQuestionsUseCase {
        GenerateQuestionsUseCase::new(client)
    }

    #[tokio::test]
    async fn test_extracts_questions_from_completion() {
        let client = Arc::new(ScriptedClient::replying(
            "1. What device type?\n- Age range?\nQ: Any comparator?\nFree line",
        ));
        let envelope = use_case(client.clone())
            .execute(GenerateQuestionsInput::new("Insulin pumps in type 1 diabetes"))
            .await;

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"questions": ["What device type?", "Age range?", "Any comparator?", "Free line"]})
        );

        let calls = client.calls.lock().unwrap();
        let (prompt, params) = &calls[0];
        assert!(prompt.ends_with("Insulin pumps in type 1 diabetes\nQuestions:"));
        assert_eq!(params.max_tokens, 500);
    }

    #[tokio::test]
    async fn test_empty_completion_is_a_failure() {
        let client = Arc::new(ScriptedClient::replying("   "));
        let envelope = use_case(client)
            .execute(GenerateQuestionsInput::new("Knee prostheses"))
            .await;

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"error": "Empty response from model", "questions": []})
        );
    }

    #[tokio::test]
    async fn test_numbered_line_without_period_is_a_failure() {
        let client = Arc::new(ScriptedClient::replying("1) Which outcome?"));
        let envelope = use_case(client)
            .execute(GenerateQuestionsInput::new("Knee prostheses"))
            .await;

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "error": "Numbered line without a period: \"1) Which outcome?\"",
                "questions": []
            })
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_folded_into_envelope() {
        let client = Arc::new(ScriptedClient::failing(ModelClientError::MissingApiKey(
            "MISTRAL_API_KEY".to_string(),
        )));
        let envelope = use_case(client)
            .execute(GenerateQuestionsInput::new("Knee prostheses"))
            .await;

        assert_eq!(
            envelope.error(),
            Some("MISTRAL_API_KEY environment variable not set.")
        );
        assert!(envelope.payload().is_empty());
    }

    #[tokio::test]
    async fn test_blank_description_skips_model() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let uc = use_case(client.clone());

        let missing = uc.execute(GenerateQuestionsInput::new("")).await;
        assert_eq!(missing.error(), Some("Query is required"));

        let blank = uc.execute(GenerateQuestionsInput::new("  \n")).await;
        assert_eq!(blank.error(), Some("Query cannot be empty"));

        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_cap_by_default() {
        let completion = (1..=8)
            .map(|i| format!("{i}. Question {i}?"))
            .collect::<Vec<_>>()
            .join("\n");
        let client = Arc::new(ScriptedClient::replying(&completion));
        let envelope = use_case(client)
            .execute(GenerateQuestionsInput::new("Cochlear implants"))
            .await;
        assert_eq!(envelope.payload().len(), 8);
    }

    #[tokio::test]
    async fn test_optional_cap_truncates() {
        let completion = (1..=8)
            .map(|i| format!("- Question {i}?"))
            .collect::<Vec<_>>()
            .join("\n");
        let client = Arc::new(ScriptedClient::replying(&completion));
        let envelope = use_case(client)
            .with_params(QuestionsParams::default().with_max_questions(Some(5)))
            .execute(GenerateQuestionsInput::new("Cochlear implants"))
            .await;

        assert!(envelope.is_success());
        assert_eq!(envelope.payload().len(), 5);
        assert_eq!(envelope.payload().questions()[4], "Question 5?");
    }

    #[tokio::test]
    async fn test_exchange_is_logged() {
        let client = Arc::new(ScriptedClient::replying("1. Which body part?"));
        let logger = Arc::new(RecordingLogger::default());
        use_case(client)
            .with_exchange_logger(logger.clone())
            .execute(GenerateQuestionsInput::new("Hip implants"))
            .await;

        assert_eq!(logger.event_types(), vec!["prompt_sent", "completion_received"]);
        let events = logger.events.lock().unwrap();
        assert_eq!(events[0].1["pipeline"], "questions");
        assert_eq!(events[0].1["model"], "open-mistral-7b");
    }
}
