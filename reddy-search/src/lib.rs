//! # reddy-search
//!
//! Concurrent multi-provider web search for Reddy.
//!
//! A query goes to every configured provider at once. Each provider's
//! response is normalised into a [`SearchResult`]; the outputs are merged,
//! deduplicated by URL, ordered with the primary provider first, and
//! truncated to a bounded result count.
//!
//! ## Design
//!
//! - Providers: Google Custom Search (API key + engine id), SerpApi
//!   (API key), and DuckDuckGo's HTML endpoint (no key)
//! - Providers are queried concurrently; all outputs are buffered before
//!   merging, so network completion order never changes the result order
//! - Partial failure is invisible: a failing provider contributes an empty
//!   list and a warn-level log entry
//! - Providers without credentials are excluded when the adapter set is built
//! - Stateless: no caching, no retries
//!
//! ## Security
//!
//! - API keys are never logged or included in error messages
//! - Search queries are logged only at trace level

pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod types;

pub use config::{GoogleCredentials, ProviderCredentials, SearchConfig, SerpApiCredentials};
pub use error::{ProviderError, Result, SearchError};
pub use orchestrator::aggregate::{aggregate, aggregate_with_primary};
pub use provider::SearchProvider;
pub use providers::build_providers;
pub use types::{AggregatedResultSet, Provider, ProviderQuery, SearchResult};

/// Search the web using every provider enabled in `config`.
///
/// Providers whose credentials are missing are skipped. Results are
/// merged, deduplicated by URL, ordered with the primary provider first,
/// and truncated to `config.max_results`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the configuration is invalid.
/// Individual provider failures are logged and never returned; if every
/// provider fails the result set is simply empty.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> reddy_search::Result<()> {
/// let config = reddy_search::SearchConfig {
///     credentials: reddy_search::ProviderCredentials::from_env(),
///     ..Default::default()
/// };
/// let results = reddy_search::search("weather today", &config).await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<AggregatedResultSet> {
    orchestrator::aggregate::orchestrate_search(query, config).await
}
