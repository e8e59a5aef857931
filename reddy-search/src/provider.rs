//! Trait definition for pluggable search provider adapters.
//!
//! Each provider (Google, SerpApi, DuckDuckGo) implements
//! [`SearchProvider`] to translate its own request/response shape into
//! canonical [`SearchResult`] values.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{Provider, ProviderQuery, SearchResult};

/// A pluggable search provider adapter.
///
/// Implementors handle their own:
///
/// - request construction with query encoding
/// - credentials, supplied at construction
/// - response parsing into [`SearchResult`]
/// - request timeout
///
/// Adapters are shared across concurrent aggregations, so they must be
/// `Send + Sync`. The trait is object safe; the aggregator works over
/// `Arc<dyn SearchProvider>`.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `query` against this provider.
    ///
    /// Returns at most `query.max_results_per_provider` results in the
    /// provider's own ranking order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, timeout, an
    /// unexpected response shape, or an error payload from the provider.
    async fn search(&self, query: &ProviderQuery) -> Result<Vec<SearchResult>, ProviderError>;

    /// Which [`Provider`] this adapter represents.
    fn kind(&self) -> Provider;
}
