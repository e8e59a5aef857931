//! Configuration for reddy, persisted as TOML.
//!
//! Credentials may live in the `[credentials]` table or in the process
//! environment (`GOOGLE_API_KEY`, `GOOGLE_CSE_ID`, `SERPAPI_API_KEY`);
//! values from the file win.

use reddy_search::{Provider, ProviderCredentials, SearchConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ReddyError, Result};

/// Default system prompt handed to the LLM alongside the search context.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are ReddyGPT, a helpful assistant. \
Answer the user's query using the provided web search context when it is relevant, \
and cite sources by URL.";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Provider selection, limits and timeouts.
    pub search: SearchSection,
    /// Provider credentials.
    pub credentials: ProviderCredentials,
    /// Context block and prompt settings.
    pub context: ContextConfig,
    /// Diagnostic logging settings.
    pub logging: LoggingConfig,
}

/// `[search]` table, mirrored onto [`SearchConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Providers to query, in merge order.
    pub providers: Vec<Provider>,
    /// Provider ordered first (defaults to the first entry of `providers`).
    pub primary: Option<Provider>,
    /// Results requested from each provider.
    pub per_provider_limit: usize,
    /// Results kept after merging.
    pub max_results: usize,
    /// Per-provider request timeout in seconds.
    pub timeout_seconds: u64,
    /// Request safe search where supported.
    pub safe_search: bool,
    /// Fixed User-Agent (None = rotate).
    pub user_agent: Option<String>,
}

impl Default for SearchSection {
    fn default() -> Self {
        let defaults = SearchConfig::default();
        Self {
            providers: defaults.providers,
            primary: defaults.primary,
            per_provider_limit: defaults.per_provider_limit,
            max_results: defaults.max_results,
            timeout_seconds: defaults.timeout_seconds,
            safe_search: defaults.safe_search,
            user_agent: defaults.user_agent,
        }
    }
}

/// `[context]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Results rendered into the context block.
    pub max_results: usize,
    /// Snippets longer than this many characters are cut.
    pub max_snippet_chars: usize,
    /// System message for the LLM.
    pub system_prompt: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            max_snippet_chars: 500,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_owned(),
        }
    }
}

/// `[logging]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Whether to also write logs to a file.
    pub file_enabled: bool,
    /// Log directory (None = platform default).
    pub directory: Option<PathBuf>,
    /// Log file name inside `directory`.
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: true,
            directory: None,
            file_name: "reddy.log".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// The directory log files go to.
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(crate::reddy_dirs::log_dir)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ReddyError::Config(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found; using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ReddyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> PathBuf {
        crate::reddy_dirs::config_file()
    }

    /// Fill missing credentials from the process environment.
    #[must_use]
    pub fn with_env_credentials(self) -> Self {
        self.with_credentials_fallback(ProviderCredentials::from_env())
    }

    /// Fill missing credentials from `fallback`, keeping any already set.
    #[must_use]
    pub fn with_credentials_fallback(mut self, fallback: ProviderCredentials) -> Self {
        self.credentials = self.credentials.or(fallback);
        self
    }

    /// Build the search-layer configuration.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            providers: self.search.providers.clone(),
            primary: self.search.primary,
            per_provider_limit: self.search.per_provider_limit,
            max_results: self.search.max_results,
            timeout_seconds: self.search.timeout_seconds,
            safe_search: self.search.safe_search,
            user_agent: self.search.user_agent.clone(),
            credentials: self.credentials.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reddy_search::{GoogleCredentials, SerpApiCredentials};

    #[test]
    fn default_config_matches_search_defaults() {
        let config = AppConfig::default();
        let search = config.search_config();
        assert_eq!(search.max_results, 5);
        assert_eq!(search.per_provider_limit, 3);
        assert_eq!(search.timeout_seconds, 15);
        assert_eq!(search.primary, Some(Provider::Google));
        assert!(search.validate().is_ok());
    }

    #[test]
    fn default_context_settings() {
        let config = ContextConfig::default();
        assert_eq!(config.max_results, 3);
        assert_eq!(config.max_snippet_chars, 500);
        assert!(config.system_prompt.contains("ReddyGPT"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[search]
providers = ["DuckDuckGo", "Google"]
max_results = 8

[context]
max_results = 2
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(
            config.search.providers,
            vec![Provider::DuckDuckGo, Provider::Google]
        );
        assert_eq!(config.search.max_results, 8);
        assert_eq!(config.search.per_provider_limit, 3);
        assert_eq!(config.context.max_results, 2);
        assert_eq!(config.logging.file_name, "reddy.log");
    }

    #[test]
    fn credentials_table_parses() {
        let toml_str = r#"
[credentials.google]
api_key = "g-key"
cse_id = "cse"

[credentials.serpapi]
api_key = "s-key"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        let search = config.search_config();
        assert!(search.credentials.has(Provider::Google));
        assert!(search.credentials.has(Provider::SerpApi));
    }

    #[test]
    fn file_credentials_win_over_fallback() {
        let config = AppConfig {
            credentials: ProviderCredentials {
                serpapi: Some(SerpApiCredentials {
                    api_key: "file".into(),
                }),
                ..Default::default()
            },
            ..Default::default()
        }
        .with_credentials_fallback(ProviderCredentials {
            google: Some(GoogleCredentials {
                api_key: "env-g".into(),
                cse_id: "env-c".into(),
            }),
            serpapi: Some(SerpApiCredentials {
                api_key: "env".into(),
            }),
        });

        assert_eq!(
            config.credentials.serpapi.as_ref().map(|c| c.api_key.as_str()),
            Some("file")
        );
        assert!(config.credentials.google.is_some());
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.search.providers = vec![Provider::SerpApi, Provider::DuckDuckGo];
        config.search.primary = Some(Provider::SerpApi);
        config.context.max_snippet_chars = 120;
        config.save_to_file(&path).expect("save");

        let loaded = AppConfig::from_file(&path).expect("load");
        assert_eq!(loaded.search.providers, config.search.providers);
        assert_eq!(loaded.search.primary, Some(Provider::SerpApi));
        assert_eq!(loaded.context.max_snippet_chars, 120);
    }

    #[test]
    fn load_or_default_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config =
            AppConfig::load_or_default(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config.search.max_results, 5);
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = AppConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ReddyError::Config(_)));
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = AppConfig::default_config_path();
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn logging_directory_override() {
        let logging = LoggingConfig {
            directory: Some(PathBuf::from("/var/log/reddy")),
            ..Default::default()
        };
        assert_eq!(logging.resolved_directory(), PathBuf::from("/var/log/reddy"));
    }
}
