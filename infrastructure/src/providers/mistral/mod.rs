//! Mistral provider
//!
//! HTTP adapter for the hosted Mistral models used by both pipelines.

mod adapter;
mod types;

pub use adapter::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, MistralClient};
