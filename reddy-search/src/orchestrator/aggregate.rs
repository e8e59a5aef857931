//! Core aggregator: concurrent multi-provider fan-out, merge, dedup, order, truncate.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::error::{ProviderError, SearchError};
use crate::provider::SearchProvider;
use crate::providers::build_providers;
use crate::types::{AggregatedResultSet, Provider, ProviderQuery, SearchResult};

use super::dedup::deduplicate;
use super::ordering::order_by_primary;

/// Aggregate results from `providers`, treating the first one as primary.
///
/// See [`aggregate_with_primary`] for the pipeline.
pub async fn aggregate(
    query: &str,
    providers: &[Arc<dyn SearchProvider>],
    per_provider_limit: usize,
    total_limit: usize,
) -> AggregatedResultSet {
    let primary = providers.first().map(|p| p.kind());
    aggregate_with_primary(query, providers, per_provider_limit, total_limit, primary).await
}

/// Aggregate results from `providers` with an explicit primary provider.
///
/// # Pipeline
///
/// 1. Query every provider concurrently with [`futures::future::join_all`]
/// 2. Recover each failed provider to an empty list, logging at warn level
/// 3. Merge in provider order, keeping each provider's internal order
/// 4. Drop duplicate URLs, first occurrence wins
/// 5. Stable-sort the primary provider's results to the front
/// 6. Truncate to `total_limit`
///
/// `query` must be non-empty and both limits positive; these are not
/// checked here. Never fails: if every provider fails the set is empty.
pub async fn aggregate_with_primary(
    query: &str,
    providers: &[Arc<dyn SearchProvider>],
    per_provider_limit: usize,
    total_limit: usize,
    primary: Option<Provider>,
) -> AggregatedResultSet {
    let provider_query = ProviderQuery::new(query, per_provider_limit);

    // join_all yields outputs in input order regardless of completion order.
    let outcomes = futures::future::join_all(providers.iter().map(|provider| {
        let q = &provider_query;
        async move { (provider.kind(), provider.search(q).await) }
    }))
    .await;

    let merged: Vec<SearchResult> = outcomes
        .into_iter()
        .flat_map(|(provider, outcome)| recover(provider, outcome))
        .collect();

    let mut results = order_by_primary(deduplicate(merged), primary);
    results.truncate(total_limit);

    tracing::debug!(
        providers = providers.len(),
        count = results.len(),
        "aggregation complete"
    );

    AggregatedResultSet::from_vec(results)
}

/// Coerce a provider failure into an empty contribution.
fn recover(provider: Provider, outcome: Result<Vec<SearchResult>, ProviderError>) -> Vec<SearchResult> {
    match outcome {
        Ok(results) => {
            tracing::debug!(%provider, count = results.len(), "provider returned results");
            results
        }
        Err(err) => {
            tracing::warn!(%provider, error = %err, "provider query failed");
            Vec::new()
        }
    }
}

/// Run an aggregated search driven by `config`.
///
/// Validates the configuration, builds the adapters whose credentials
/// are present, and aggregates with the configured limits and primary.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration, or
/// [`SearchError::Http`] if an adapter's client cannot be built.
/// Provider failures never surface here.
pub async fn orchestrate_search(
    query: &str,
    config: &SearchConfig,
) -> Result<AggregatedResultSet, SearchError> {
    config.validate()?;

    let providers = build_providers(config)?;
    if providers.is_empty() {
        tracing::warn!("no search providers available");
    }

    Ok(aggregate_with_primary(
        query,
        &providers,
        config.per_provider_limit,
        config.max_results,
        config.effective_primary(),
    )
    .await)
}
