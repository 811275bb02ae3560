//! Domain layer for slr-assistant
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Response normalization
//!
//! Both pipelines receive one free-form model completion and must turn it
//! into a validated structure:
//!
//! - **Clarifying questions**: [`QuestionExtractor`] strips list markup and
//!   returns a [`QuestionList`], or a failure with an empty list.
//! - **Search query**: [`QueryStructureDecoder`] tries strict JSON first and
//!   falls back to splitting on `" AND "`; it always yields a
//!   [`QueryStructure`].
//!
//! ## Envelope
//!
//! [`ResponseEnvelope`] is the uniform result: either the payload, or an
//! error message next to a schema-valid fallback payload.

pub mod core;
pub mod envelope;
pub mod prompt;
pub mod query;
pub mod question;
pub mod util;

// Re-export commonly used types
pub use core::{
    answers::Answers,
    description::ResearchDescription,
    error::DomainError,
    generation::{GenerationParams, ResponseFormat},
    model::Model,
};
pub use envelope::ResponseEnvelope;
pub use prompt::PromptTemplate;
pub use query::{
    decoder::{DecodeSource, DecodedQuery, QueryStructureDecoder},
    entities::{Operator, QueryStructure, Subquery},
    manual::{QuerySyntaxError, parse_manual_query, validate_manual_query},
    strategy::{BooleanSplitStrategy, DecodeStrategy, FencedJsonStrategy, StrictJsonStrategy},
    validation::{DecodeError, SubqueryError},
};
pub use question::{
    entities::QuestionList,
    extractor::{ExtractError, QuestionExtractor},
};
