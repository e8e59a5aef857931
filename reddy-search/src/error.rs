//! Error types for the reddy-search crate.
//!
//! Provider failures ([`ProviderError`]) never reach the caller of the
//! aggregator; they are logged and recovered to an empty result list.
//! [`SearchError`] covers the configuration-driven entry point only.
//! No API keys or other credentials appear in error messages.

use crate::types::Provider;

/// Failure of a single provider adapter call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The request exceeded the adapter's deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider answered with an explicit error payload.
    #[error("provider error: {0}")]
    Api(String),
}

impl ProviderError {
    /// Classify a transport error, keeping timeouts distinct from other failures.
    pub(crate) fn from_reqwest(provider: Provider, err: reqwest::Error) -> Self {
        // Query strings carry API keys; never echo the request URL.
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout(format!("{provider} request timed out"))
        } else if err.is_decode() {
            Self::Parse(format!("{provider} response decode failed: {err}"))
        } else {
            Self::Http(format!("{provider} request failed: {err}"))
        }
    }
}

/// Errors surfaced by the configuration-driven search entry point.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The shared HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Convenience type alias for reddy-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
