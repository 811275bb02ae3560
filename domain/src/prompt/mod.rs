//! Prompt domain
//!
//! Templates for the clarifying-question and query-generation prompts.

mod template;

pub use template::PromptTemplate;
