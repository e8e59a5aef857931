//! Search provider adapters.
//!
//! Each module provides a struct implementing [`crate::provider::SearchProvider`]
//! for one external search service, plus a parser function that turns that
//! service's raw response into canonical results.

pub mod duckduckgo;
pub mod google;
pub mod serpapi;

use std::sync::Arc;

pub use duckduckgo::DuckDuckGoProvider;
pub use google::GoogleProvider;
pub use serpapi::SerpApiProvider;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http::ClientOptions;
use crate::provider::SearchProvider;
use crate::types::Provider;

/// Build the active adapter set for `config`, in `config.providers` order.
///
/// Providers whose credentials are missing are left out and logged at
/// info level. The result may be empty.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if an adapter's HTTP client cannot be built.
pub fn build_providers(config: &SearchConfig) -> Result<Vec<Arc<dyn SearchProvider>>, SearchError> {
    let options = ClientOptions::from_config(config);
    let mut active: Vec<Arc<dyn SearchProvider>> = Vec::with_capacity(config.providers.len());

    for provider in &config.providers {
        let adapter: Arc<dyn SearchProvider> = match provider {
            Provider::Google => match config.credentials.google {
                Some(ref creds) => Arc::new(GoogleProvider::new(creds.clone(), &options)?),
                None => {
                    tracing::info!(provider = %provider, "credentials missing; provider disabled");
                    continue;
                }
            },
            Provider::SerpApi => match config.credentials.serpapi {
                Some(ref creds) => Arc::new(SerpApiProvider::new(creds.clone(), &options)?),
                None => {
                    tracing::info!(provider = %provider, "credentials missing; provider disabled");
                    continue;
                }
            },
            Provider::DuckDuckGo => {
                Arc::new(DuckDuckGoProvider::new(&options)?.with_safe_search(config.safe_search))
            }
        };
        active.push(adapter);
    }

    Ok(active)
}

/// Collapse runs of whitespace (including newlines) into single spaces.
pub(crate) fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GoogleCredentials, ProviderCredentials, SerpApiCredentials};

    fn kinds(providers: &[Arc<dyn SearchProvider>]) -> Vec<Provider> {
        providers.iter().map(|p| p.kind()).collect()
    }

    #[test]
    fn providers_without_credentials_are_excluded() {
        let config = SearchConfig::default();
        let providers = build_providers(&config).expect("build");
        assert_eq!(kinds(&providers), vec![Provider::DuckDuckGo]);
    }

    #[test]
    fn all_providers_built_with_full_credentials() {
        let config = SearchConfig {
            credentials: ProviderCredentials {
                google: Some(GoogleCredentials {
                    api_key: "g".into(),
                    cse_id: "c".into(),
                }),
                serpapi: Some(SerpApiCredentials { api_key: "s".into() }),
            },
            ..Default::default()
        };
        let providers = build_providers(&config).expect("build");
        assert_eq!(
            kinds(&providers),
            vec![Provider::Google, Provider::SerpApi, Provider::DuckDuckGo]
        );
    }

    #[test]
    fn build_order_follows_config_order() {
        let config = SearchConfig {
            providers: vec![Provider::DuckDuckGo, Provider::SerpApi],
            primary: None,
            credentials: ProviderCredentials {
                serpapi: Some(SerpApiCredentials { api_key: "s".into() }),
                ..Default::default()
            },
            ..Default::default()
        };
        let providers = build_providers(&config).expect("build");
        assert_eq!(kinds(&providers), vec![Provider::DuckDuckGo, Provider::SerpApi]);
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Rust\n is   fast \t"), "Rust is fast");
        assert_eq!(clean_text(""), "");
    }
}
