//! Core types: result records, provider identification, queries and result sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single search result in canonical form.
///
/// `title` and `snippet` may be empty but are always present. `url` is the
/// deduplication key; it is empty when the provider supplied no link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The URL of the result page.
    pub url: String,
    /// A text snippet summarising the page content.
    pub snippet: String,
    /// Which provider returned this result.
    pub provider: Provider,
}

impl SearchResult {
    /// Build a result, converting each text field into an owned string.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        provider: Provider,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            provider,
        }
    }
}

/// Search providers reddy can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Google Custom Search JSON API (requires an API key and engine id).
    Google,
    /// SerpApi search aggregator (requires an API key).
    SerpApi,
    /// DuckDuckGo HTML endpoint, free and keyless.
    DuckDuckGo,
}

impl Provider {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::SerpApi => "SerpApi",
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Returns all available provider variants, in default merge order.
    pub fn all() -> &'static [Provider] {
        &[Self::Google, Self::SerpApi, Self::DuckDuckGo]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "serpapi" | "serp" => Ok(Self::SerpApi),
            "duckduckgo" | "ddg" => Ok(Self::DuckDuckGo),
            other => Err(format!("unknown search provider: {other}")),
        }
    }
}

/// The query handed to every provider adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    /// Free-text search query.
    pub text: String,
    /// Upper bound on results each provider should return.
    pub max_results_per_provider: usize,
}

impl ProviderQuery {
    pub fn new(text: impl Into<String>, max_results_per_provider: usize) -> Self {
        Self {
            text: text.into(),
            max_results_per_provider,
        }
    }
}

/// Ordered, deduplicated and bounded output of one aggregation.
///
/// Serialises as a plain JSON array of [`SearchResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedResultSet {
    results: Vec<SearchResult>,
}

impl AggregatedResultSet {
    pub(crate) fn from_vec(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.results.iter()
    }

    pub fn as_slice(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<SearchResult> {
        self.results
    }
}

impl IntoIterator for AggregatedResultSet {
    type Item = SearchResult;
    type IntoIter = std::vec::IntoIter<SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregatedResultSet {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
