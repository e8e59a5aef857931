//! Primary-provider ordering.
//!
//! Results from the primary provider rank 0, everything else ranks 1.
//! The sort is stable, so results with equal rank keep merge order.

use crate::types::{Provider, SearchResult};

/// Rank of a result under the primary-first policy (lower sorts first).
pub fn provider_rank(provider: Provider, primary: Option<Provider>) -> u8 {
    if Some(provider) == primary {
        0
    } else {
        1
    }
}

/// Stable-sort `results` so the primary provider's results come first.
///
/// With no primary the input order is returned unchanged.
pub fn order_by_primary(mut results: Vec<SearchResult>, primary: Option<Provider>) -> Vec<SearchResult> {
    results.sort_by_key(|r| provider_rank(r.provider, primary));
    results
}
