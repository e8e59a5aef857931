//! DuckDuckGo adapter — the free, keyless provider.
//!
//! Uses the HTML-only endpoint at `https://html.duckduckgo.com/html/`,
//! which needs no JavaScript and tolerates automated requests.

use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{ProviderError, SearchError};
use crate::http::{self, ClientOptions};
use crate::provider::SearchProvider;
use crate::providers::clean_text;
use crate::types::{Provider, ProviderQuery, SearchResult};

const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com";

/// DuckDuckGo HTML adapter.
pub struct DuckDuckGoProvider {
    client: reqwest::Client,
    base_url: String,
    safe_search: bool,
}

impl DuckDuckGoProvider {
    /// Create an adapter with its own HTTP client. Safe search starts enabled.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the client cannot be built.
    pub fn new(options: &ClientOptions) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(options)?,
            base_url: DEFAULT_BASE_URL.to_owned(),
            safe_search: true,
        })
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = http::trim_base(base_url.as_ref());
        self
    }

    pub fn with_safe_search(mut self, safe_search: bool) -> Self {
        self.safe_search = safe_search;
        self
    }
}

/// Unwrap DuckDuckGo's redirect links.
///
/// Result anchors look like `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`;
/// the target lives URL-encoded in the `uddg` parameter.
fn unwrap_redirect(href: &str) -> Option<String> {
    let full_href = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_owned()
    };

    let parsed = Url::parse(&full_href).ok()?;

    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
    } else {
        Some(full_href)
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    async fn search(&self, query: &ProviderQuery) -> Result<Vec<SearchResult>, ProviderError> {
        tracing::trace!(query = %query.text, "DuckDuckGo search");

        let mut form = vec![("q", query.text.as_str())];
        if self.safe_search {
            form.push(("kp", "1"));
        }

        let html = self
            .client
            .post(format!("{}/html/", self.base_url))
            .form(&form)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(Provider::DuckDuckGo, e))?
            .error_for_status()
            .map_err(|e| ProviderError::from_reqwest(Provider::DuckDuckGo, e))?
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(Provider::DuckDuckGo, e))?;

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        parse_duckduckgo_html(&html, query.max_results_per_provider)
    }

    fn kind(&self) -> Provider {
        Provider::DuckDuckGo
    }
}

/// Parse a DuckDuckGo HTML results page, skipping ads.
pub(crate) fn parse_duckduckgo_html(
    html: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, ProviderError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| ProviderError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse(".result__a")
        .map_err(|e| ProviderError::Parse(format!("invalid title selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".result__snippet")
        .map_err(|e| ProviderError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        if results.len() >= max_results {
            break;
        }

        let Some(anchor) = element.select(&title_sel).next() else {
            continue;
        };

        let title = clean_text(&anchor.text().collect::<String>());
        if title.is_empty() {
            continue;
        }

        let url = anchor
            .value()
            .attr("href")
            .and_then(unwrap_redirect)
            .unwrap_or_default();

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| clean_text(&el.text().collect::<String>()))
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            url,
            snippet,
            provider: Provider::DuckDuckGo,
        });
    }

    tracing::debug!(count = results.len(), "DuckDuckGo results parsed");
    Ok(results)
}
