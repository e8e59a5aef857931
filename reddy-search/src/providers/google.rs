//! Google Custom Search JSON API adapter.
//!
//! Requires an API key and a programmable search engine id (`cx`).
//! The API returns at most 10 items per request.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::GoogleCredentials;
use crate::error::{ProviderError, SearchError};
use crate::http::{self, ClientOptions};
use crate::provider::SearchProvider;
use crate::providers::clean_text;
use crate::types::{Provider, ProviderQuery, SearchResult};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Largest `num` the Custom Search API accepts.
const MAX_NUM: usize = 10;

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    items: Vec<GoogleItem>,
    error: Option<GoogleApiError>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    #[serde(default)]
    title: String,
    link: Option<String>,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Deserialize)]
struct GoogleApiError {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

/// Google Custom Search adapter.
pub struct GoogleProvider {
    client: reqwest::Client,
    credentials: GoogleCredentials,
    base_url: String,
}

impl GoogleProvider {
    /// Create an adapter with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the client cannot be built.
    pub fn new(credentials: GoogleCredentials, options: &ClientOptions) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(options)?,
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
        })
    }

    /// Point the adapter at a different API host (used for testing).
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = http::trim_base(base_url.as_ref());
        self
    }
}

#[async_trait]
impl SearchProvider for GoogleProvider {
    async fn search(&self, query: &ProviderQuery) -> Result<Vec<SearchResult>, ProviderError> {
        tracing::trace!(query = %query.text, "Google search");

        let num = query.max_results_per_provider.clamp(1, MAX_NUM).to_string();
        let response = self
            .client
            .get(format!("{}/customsearch/v1", self.base_url))
            .query(&[
                ("key", self.credentials.api_key.as_str()),
                ("cx", self.credentials.cse_id.as_str()),
                ("q", query.text.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(Provider::Google, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(Provider::Google, e))?;

        tracing::trace!(%status, bytes = body.len(), "Google response received");

        if !status.is_success() {
            // Error bodies usually carry a JSON message; prefer it over the bare status.
            return Err(match parse_google_json(&body, 0) {
                Err(api @ ProviderError::Api(_)) => api,
                _ => ProviderError::Http(format!("Google returned HTTP {status}")),
            });
        }

        parse_google_json(&body, query.max_results_per_provider)
    }

    fn kind(&self) -> Provider {
        Provider::Google
    }
}

/// Parse a Custom Search JSON response into results.
///
/// A response with no `items` field means no results. An `error`
/// object yields [`ProviderError::Api`].
pub(crate) fn parse_google_json(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, ProviderError> {
    let parsed: GoogleResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Parse(format!("Google response is not valid JSON: {e}")))?;

    if let Some(err) = parsed.error {
        return Err(ProviderError::Api(format!(
            "Google error {}: {}",
            err.code, err.message
        )));
    }

    let results: Vec<SearchResult> = parsed
        .items
        .into_iter()
        .take(max_results)
        .map(|item| SearchResult {
            title: clean_text(&item.title),
            url: item.link.unwrap_or_default(),
            snippet: clean_text(&item.snippet),
            provider: Provider::Google,
        })
        .collect();

    tracing::debug!(count = results.len(), "Google results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FIXTURE: &str = r#"{
        "kind": "customsearch#search",
        "items": [
            {
                "title": "Rust Programming Language",
                "link": "https://www.rust-lang.org/",
                "snippet": "A language empowering everyone\nto build reliable software."
            },
            {
                "title": "The Rust Book",
                "link": "https://doc.rust-lang.org/book/",
                "snippet": "An introductory book about Rust."
            },
            {
                "title": "Linkless entry"
            }
        ]
    }"#;

    fn credentials() -> GoogleCredentials {
        GoogleCredentials {
            api_key: "test-key".into(),
            cse_id: "test-cx".into(),
        }
    }

    #[test]
    fn parse_fixture_returns_results() {
        let results = parse_google_json(FIXTURE, 10).expect("should parse");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].url, "https://www.rust-lang.org/");
        assert_eq!(
            results[0].snippet,
            "A language empowering everyone to build reliable software."
        );
        assert_eq!(results[0].provider, Provider::Google);
    }

    #[test]
    fn missing_link_and_snippet_become_empty_strings() {
        let results = parse_google_json(FIXTURE, 10).expect("should parse");
        assert_eq!(results[2].url, "");
        assert_eq!(results[2].snippet, "");
    }

    #[test]
    fn parse_respects_max_results() {
        let results = parse_google_json(FIXTURE, 2).expect("should parse");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn missing_items_means_no_results() {
        let results = parse_google_json(r#"{"kind": "customsearch#search"}"#, 10)
            .expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn error_payload_is_api_error() {
        let body = r#"{"error": {"code": 403, "message": "Daily limit exceeded"}}"#;
        let err = parse_google_json(body, 10).unwrap_err();
        assert!(matches!(err, ProviderError::Api(_)));
        assert!(err.to_string().contains("Daily limit exceeded"));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_google_json("<html>nope</html>", 10).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[test]
    fn kind_is_google() {
        let provider = GoogleProvider::new(credentials(), &ClientOptions::default()).expect("build");
        assert_eq!(provider.kind(), Provider::Google);
    }

    #[tokio::test]
    async fn sends_credentials_and_clamped_num() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .and(query_param("key", "test-key"))
            .and(query_param("cx", "test-cx"))
            .and(query_param("q", "rust"))
            .and(query_param("num", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GoogleProvider::new(credentials(), &ClientOptions::default())
            .expect("build")
            .with_base_url(server.uri());
        let results = provider
            .search(&ProviderQuery::new("rust", 50))
            .await
            .expect("search should succeed");
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn http_error_with_json_body_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"error": {"code": 400, "message": "API key not valid"}}"#,
            ))
            .mount(&server)
            .await;

        let provider = GoogleProvider::new(credentials(), &ClientOptions::default())
            .expect("build")
            .with_base_url(server.uri());
        let err = provider
            .search(&ProviderQuery::new("rust", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Api(_)));
        assert!(!err.to_string().contains("test-key"));
    }

    #[tokio::test]
    async fn http_error_without_json_body_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let provider = GoogleProvider::new(credentials(), &ClientOptions::default())
            .expect("build")
            .with_base_url(server.uri());
        let err = provider
            .search(&ProviderQuery::new("rust", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Http(_)));
    }
}
