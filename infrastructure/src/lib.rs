//! Infrastructure layer for slr-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileProviderConfig,
    FileQueryConfig, FileQuestionsConfig,
};
pub use logging::JsonlExchangeLogger;
pub use providers::MistralClient;
