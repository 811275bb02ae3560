//! Shared utilities for use cases.
//!
//! Both pipelines call the model the same way: log the prompt, request one
//! completion, log what came back.

use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger};
use crate::ports::model_client::{ModelClient, ModelClientError};
use serde_json::json;
use slr_domain::GenerationParams;
use slr_domain::util::log_preview;
use tracing::{debug, warn};

/// Request one completion, recording the exchange on both log channels.
pub(crate) async fn request_completion(
    client: &dyn ModelClient,
    logger: &dyn ExchangeLogger,
    pipeline: &'static str,
    prompt: &str,
    params: &GenerationParams,
) -> Result<String, ModelClientError> {
    logger.log(ExchangeEvent::new(
        "prompt_sent",
        json!({
            "pipeline": pipeline,
            "model": params.model.as_str(),
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
            "prompt": prompt,
        }),
    ));

    match client.complete(prompt, params).await {
        Ok(completion) => {
            debug!(
                "{} completion ({} bytes): {}",
                pipeline,
                completion.len(),
                log_preview(&completion, 200)
            );
            logger.log(ExchangeEvent::new(
                "completion_received",
                json!({
                    "pipeline": pipeline,
                    "completion": completion,
                }),
            ));
            Ok(completion)
        }
        Err(e) => {
            warn!("{} model call failed: {}", pipeline, e);
            logger.log(ExchangeEvent::new(
                "completion_failed",
                json!({
                    "pipeline": pipeline,
                    "error": e.to_string(),
                    "transient": e.is_transient(),
                }),
            ));
            Err(e)
        }
    }
}
