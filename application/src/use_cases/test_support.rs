//! Test mocks shared by the use-case tests.

use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger};
use crate::ports::model_client::{ModelClient, ModelClientError};
use async_trait::async_trait;
use slr_domain::GenerationParams;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Model client replaying scripted results and recording what it was sent.
pub(crate) struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, ModelClientError>>>,
    pub(crate) calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl ScriptedClient {
    pub(crate) fn new(responses: Vec<Result<String, ModelClientError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub(crate) fn failing(error: ModelClientError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ModelClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), params.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelClientError::Other("No more responses".to_string())))
    }
}

/// Exchange logger keeping event types in memory.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub(crate) events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl ExchangeLogger for RecordingLogger {
    fn log(&self, event: ExchangeEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
