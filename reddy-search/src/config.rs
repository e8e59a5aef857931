//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which providers are queried, the primary
//! provider for ordering, result limits, timeouts and credentials.
//! Credentials are explicit values: a provider whose credentials are
//! absent is left out of the active set when adapters are built.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SearchError;
use crate::types::Provider;

/// Environment variable holding the Google Custom Search API key.
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Environment variable holding the Google programmable search engine id.
pub const GOOGLE_CSE_ID_ENV: &str = "GOOGLE_CSE_ID";
/// Environment variable holding the SerpApi key.
pub const SERPAPI_API_KEY_ENV: &str = "SERPAPI_API_KEY";

/// Credentials for the Google Custom Search JSON API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleCredentials {
    pub api_key: String,
    pub cse_id: String,
}

impl fmt::Debug for GoogleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleCredentials")
            .field("api_key", &"<redacted>")
            .field("cse_id", &self.cse_id)
            .finish()
    }
}

/// Credentials for SerpApi.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerpApiCredentials {
    pub api_key: String,
}

impl fmt::Debug for SerpApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Per-provider credentials. `None` means the provider is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderCredentials {
    pub google: Option<GoogleCredentials>,
    pub serpapi: Option<SerpApiCredentials>,
}

impl ProviderCredentials {
    /// Read credentials from the process environment.
    ///
    /// Empty values count as absent. Google needs both the key and the
    /// engine id; either one missing leaves Google unconfigured.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let google = match (get(GOOGLE_API_KEY_ENV), get(GOOGLE_CSE_ID_ENV)) {
            (Some(api_key), Some(cse_id)) => Some(GoogleCredentials { api_key, cse_id }),
            _ => None,
        };
        let serpapi = get(SERPAPI_API_KEY_ENV).map(|api_key| SerpApiCredentials { api_key });

        Self { google, serpapi }
    }

    /// Fill any missing entry from `other`, keeping entries already set.
    pub fn or(self, other: ProviderCredentials) -> Self {
        Self {
            google: self.google.or(other.google),
            serpapi: self.serpapi.or(other.serpapi),
        }
    }

    /// Whether the given provider has everything it needs to run.
    pub fn has(&self, provider: Provider) -> bool {
        match provider {
            Provider::Google => self.google.is_some(),
            Provider::SerpApi => self.serpapi.is_some(),
            Provider::DuckDuckGo => true,
        }
    }
}

/// Configuration for an aggregated search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Which providers to query, in merge order. Queried concurrently.
    pub providers: Vec<Provider>,
    /// Provider whose results are ordered first. `None` means the first
    /// entry of `providers`.
    pub primary: Option<Provider>,
    /// Maximum results requested from each provider.
    pub per_provider_limit: usize,
    /// Maximum results returned after deduplication and ordering.
    pub max_results: usize,
    /// Per-provider HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Whether to request safe search filtering where supported.
    pub safe_search: bool,
    /// Custom User-Agent string. If `None`, rotates through a built-in list.
    pub user_agent: Option<String>,
    /// Provider credentials.
    pub credentials: ProviderCredentials,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            providers: Provider::all().to_vec(),
            primary: Some(Provider::Google),
            per_provider_limit: 3,
            max_results: 5,
            timeout_seconds: 15,
            safe_search: true,
            user_agent: None,
            credentials: ProviderCredentials::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` and `per_provider_limit` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `providers` must not be empty
    /// - `primary`, when set, must be one of `providers`
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.per_provider_limit == 0 {
            return Err(SearchError::Config(
                "per_provider_limit must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.providers.is_empty() {
            return Err(SearchError::Config(
                "at least one provider must be enabled".into(),
            ));
        }
        if let Some(primary) = self.primary {
            if !self.providers.contains(&primary) {
                return Err(SearchError::Config(format!(
                    "primary provider {primary} is not enabled"
                )));
            }
        }
        Ok(())
    }

    /// The provider ranked first when ordering merged results.
    pub fn effective_primary(&self) -> Option<Provider> {
        self.primary.or_else(|| self.providers.first().copied())
    }
}
