//! Application layer for slr-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{QueryParams, QuestionsParams};
pub use ports::{
    exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger},
    model_client::{ModelClient, ModelClientError},
};
pub use use_cases::generate_query::{
    GenerateQueryInput, GenerateQueryOutput, GenerateQueryUseCase,
};
pub use use_cases::generate_questions::{GenerateQuestionsInput, GenerateQuestionsUseCase};
