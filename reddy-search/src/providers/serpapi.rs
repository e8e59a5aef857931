//! SerpApi adapter — search-aggregator API returning Google results as JSON.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::SerpApiCredentials;
use crate::error::{ProviderError, SearchError};
use crate::http::{self, ClientOptions};
use crate::provider::SearchProvider;
use crate::providers::clean_text;
use crate::types::{Provider, ProviderQuery, SearchResult};

const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// SerpApi reports an empty result page as an error string.
const NO_RESULTS_MARKER: &str = "hasn't returned any results";

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    link: Option<String>,
    #[serde(default)]
    snippet: String,
}

/// SerpApi adapter using the `google` engine.
pub struct SerpApiProvider {
    client: reqwest::Client,
    credentials: SerpApiCredentials,
    base_url: String,
}

impl SerpApiProvider {
    /// Create an adapter with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the client cannot be built.
    pub fn new(credentials: SerpApiCredentials, options: &ClientOptions) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(options)?,
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = http::trim_base(base_url.as_ref());
        self
    }
}

#[async_trait]
impl SearchProvider for SerpApiProvider {
    async fn search(&self, query: &ProviderQuery) -> Result<Vec<SearchResult>, ProviderError> {
        tracing::trace!(query = %query.text, "SerpApi search");

        let num = query.max_results_per_provider.max(1).to_string();
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[
                ("engine", "google"),
                ("q", query.text.as_str()),
                ("api_key", self.credentials.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(Provider::SerpApi, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(Provider::SerpApi, e))?;

        tracing::trace!(%status, bytes = body.len(), "SerpApi response received");

        if !status.is_success() {
            return Err(match parse_serpapi_json(&body, 0) {
                Err(api @ ProviderError::Api(_)) => api,
                _ => ProviderError::Http(format!("SerpApi returned HTTP {status}")),
            });
        }

        parse_serpapi_json(&body, query.max_results_per_provider)
    }

    fn kind(&self) -> Provider {
        Provider::SerpApi
    }
}

/// Parse a SerpApi `search.json` response into results.
pub(crate) fn parse_serpapi_json(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, ProviderError> {
    let parsed: SerpApiResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Parse(format!("SerpApi response is not valid JSON: {e}")))?;

    if let Some(message) = parsed.error {
        if message.contains(NO_RESULTS_MARKER) {
            return Ok(Vec::new());
        }
        return Err(ProviderError::Api(format!("SerpApi error: {message}")));
    }

    let results: Vec<SearchResult> = parsed
        .organic_results
        .into_iter()
        .take(max_results)
        .map(|item| SearchResult {
            title: clean_text(&item.title),
            url: item.link.unwrap_or_default(),
            snippet: clean_text(&item.snippet),
            provider: Provider::SerpApi,
        })
        .collect();

    tracing::debug!(count = results.len(), "SerpApi results parsed");
    Ok(results)
}
