//! Clarifying questions: the list entity and the completion extractor.

pub mod entities;
pub mod extractor;
