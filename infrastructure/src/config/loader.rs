//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "slr-assistant";
const PROJECT_FILES: [&str; 2] = ["slr.toml", ".slr.toml"];
const ENV_PREFIX: &str = "SLR_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SLR_`-prefixed environment variables (`SLR_QUERY__MODEL=...`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./slr.toml` or `./.slr.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/slr-assistant/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain behind [`ConfigLoader::load`].
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/slr-assistant/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources being used, highest priority first.
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec![format!("  [ENV  ] {}* variables", ENV_PREFIX)];

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./slr.toml or ./.slr.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.provider.api_key_env, "MISTRAL_API_KEY");
        assert_eq!(config.questions.model, "open-mistral-7b");
        assert!(config.query.json_response_format);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("slr-assistant"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[query]\nmodel = \"mistral-small-latest\"\nmax_tokens = 2000").unwrap();

        let config = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(config.query.model, "mistral-small-latest");
        assert_eq!(config.query.max_tokens, 2000);
        // Untouched keys keep their defaults.
        assert_eq!(config.query.temperature, 0.0);
        assert_eq!(config.questions.max_tokens, 500);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[query]\nmax_tokens = \"lots\"").unwrap();
        assert!(ConfigLoader::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_describe_sources_lists_explicit_path() {
        let lines = ConfigLoader::describe_sources(Some(Path::new("/nonexistent/slr.toml")));
        assert!(lines.iter().any(|l| l.contains("[MISS ] Explicit: /nonexistent/slr.toml")));
        assert!(lines.last().unwrap().contains("Default"));
    }
}
