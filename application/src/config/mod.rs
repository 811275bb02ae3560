//! Application-level configuration.
//!
//! - [`QuestionsParams`]: generation parameters and list cap for the question pipeline
//! - [`QueryParams`]: generation parameters and decoder options for the query pipeline

pub mod pipeline_params;

pub use pipeline_params::{QueryParams, QuestionsParams};
