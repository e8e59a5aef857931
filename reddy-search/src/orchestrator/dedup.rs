//! First-occurrence deduplication by URL.
//!
//! Walks the merged sequence once and keeps the first result for each
//! distinct key, whichever provider produced it. Order is preserved.
//!
//! Keys are derived from a lightly normalised URL: scheme and host are
//! lowercased, default ports, the fragment and a trailing path slash
//! are dropped. Results with no usable URL (empty, whitespace, or the
//! `#` placeholder) are keyed by `(provider, title)` instead, so
//! unrelated link-less results never collapse into one.

use std::collections::HashSet;

use url::Url;

use crate::types::{Provider, SearchResult};

/// Identity of a result for deduplication purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// A real URL, normalised.
    Url(String),
    /// A result without a URL, identified by where it came from and its title.
    Unlinked { provider: Provider, title: String },
}

impl DedupKey {
    pub fn for_result(result: &SearchResult) -> Self {
        let raw = result.url.trim();
        if raw.is_empty() || raw == "#" {
            Self::Unlinked {
                provider: result.provider,
                title: result.title.clone(),
            }
        } else {
            Self::Url(normalize_url(raw))
        }
    }
}

/// Canonicalise a URL for comparison. Unparseable input is returned as-is.
pub fn normalize_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_owned();
    };

    // Parsing already lowercases scheme and host and drops default ports.
    parsed.set_fragment(None);

    let path = parsed.path().to_owned();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(path.trim_end_matches('/'));
    }

    parsed.to_string()
}

/// Drop every result whose key was already seen, keeping the first.
pub fn deduplicate(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<DedupKey> = HashSet::with_capacity(results.len());
    results
        .into_iter()
        .filter(|result| seen.insert(DedupKey::for_result(result)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(url: &str, provider: Provider, title: &str) -> SearchResult {
        SearchResult::new(title, url, format!("Snippet for {title}"), provider)
    }

    #[test]
    fn unique_urls_pass_through_in_order() {
        let deduped = deduplicate(vec![
            make_result("https://b.com", Provider::Google, "B"),
            make_result("https://a.com", Provider::DuckDuckGo, "A"),
        ]);
        let urls: Vec<_> = deduped.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://b.com", "https://a.com"]);
    }

    #[test]
    fn first_occurrence_wins_across_providers() {
        let deduped = deduplicate(vec![
            make_result("https://x.com", Provider::SerpApi, "From SerpApi"),
            make_result("https://y.com", Provider::SerpApi, "Y"),
            make_result("https://x.com", Provider::Google, "From Google"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "From SerpApi");
        assert_eq!(deduped[1].url, "https://y.com");
    }

    #[test]
    fn same_provider_duplicates_collapse() {
        let deduped = deduplicate(vec![
            make_result("https://x.com", Provider::Google, "One"),
            make_result("https://x.com", Provider::Google, "Two"),
        ]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].title, "One");
    }

    #[test]
    fn equivalent_urls_collapse_and_keep_original_spelling() {
        let deduped = deduplicate(vec![
            make_result("https://Example.COM/path/", Provider::Google, "First"),
            make_result("https://example.com/path#intro", Provider::DuckDuckGo, "Second"),
            make_result("https://example.com:443/path", Provider::SerpApi, "Third"),
        ]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].url, "https://Example.COM/path/");
    }

    #[test]
    fn query_strings_still_distinguish_urls() {
        let deduped = deduplicate(vec![
            make_result("https://example.com/search?q=a", Provider::Google, "A"),
            make_result("https://example.com/search?q=b", Provider::Google, "B"),
        ]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn bare_host_strings_compare_verbatim() {
        let deduped = deduplicate(vec![
            make_result("x.com", Provider::Google, "X"),
            make_result("x.com", Provider::SerpApi, "X-dup"),
        ]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].title, "X");
    }

    #[test]
    fn unlinked_results_are_distinct_by_title() {
        let deduped = deduplicate(vec![
            make_result("", Provider::Google, "Alpha"),
            make_result("#", Provider::Google, "Beta"),
            make_result("  ", Provider::DuckDuckGo, "Alpha"),
        ]);
        assert_eq!(deduped.len(), 3);
    }

    #[test]
    fn unlinked_repeat_from_same_provider_collapses() {
        let deduped = deduplicate(vec![
            make_result("", Provider::Google, "Alpha"),
            make_result("#", Provider::Google, "Alpha"),
        ]);
        assert_eq!(deduped.len(), 1);
    }

    #[test]
    fn normalize_root_slash_kept() {
        assert_eq!(normalize_url("https://example.com/"), "https://example.com/");
    }

    #[test]
    fn normalize_invalid_returned_unchanged() {
        assert_eq!(normalize_url("not a url"), "not a url");
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(deduplicate(vec![]).is_empty());
    }
}
