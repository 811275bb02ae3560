//! Configuration file loading for slr-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SLR_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./slr.toml` or `./.slr.toml`
//! 4. Global: `$XDG_CONFIG_HOME/slr-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileProviderConfig, FileQueryConfig,
    FileQuestionsConfig,
};
pub use loader::ConfigLoader;
