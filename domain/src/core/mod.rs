//! Core domain concepts shared across both pipelines.
//!
//! - [`description::ResearchDescription`]: validated free-text research need
//! - [`answers::Answers`]: reviewer answers to the clarifying questions
//! - [`model::Model`]: text-generation models
//! - [`generation::GenerationParams`]: per-request sampling parameters
//! - [`error::DomainError`]: input validation errors

pub mod answers;
pub mod description;
pub mod error;
pub mod generation;
pub mod model;
