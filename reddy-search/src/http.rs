//! HTTP client construction for provider adapters.
//!
//! Every adapter owns its own [`reqwest::Client`]; the per-request
//! timeout lives on the client so the aggregator never has to enforce one.

use crate::config::SearchConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, picked at random per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Timeout and identity settings for one adapter's HTTP client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl ClientOptions {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_seconds),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

/// Build a [`reqwest::Client`] for a provider adapter.
///
/// The client has a cookie store, the configured timeout, and either
/// the configured User-Agent or a random one from the built-in list.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(options: &ClientOptions) -> Result<reqwest::Client, SearchError> {
    let ua = match options.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(options.timeout)
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // USER_AGENTS is a non-empty const slice
        .unwrap_or(USER_AGENTS[0])
}

/// Trim a base URL so endpoint paths can be appended with a leading `/`.
pub(crate) fn trim_base(base: &str) -> String {
    base.trim_end_matches('/').to_owned()
}
