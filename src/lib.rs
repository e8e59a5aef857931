//! Reddy: search-grounded chat context.
//!
//! A user query is sent to several web-search providers concurrently via
//! [`reddy_search`]. The top results become a text context block, and the
//! block plus the query form the chat payload for a language model.
//!
//! # Architecture
//!
//! - **Search**: the `reddy-search` crate fans out, merges, deduplicates
//!   and orders provider results
//! - **Context**: [`context`] renders results and builds chat messages
//! - **Config**: [`config`] loads TOML settings and provider credentials
//! - **Logging**: [`logging`] wires `tracing` to stderr and a log file

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod reddy_dirs;

pub use config::AppConfig;
pub use context::{ChatMessage, ContextOptions, Role, build_context, build_messages};
pub use error::{ReddyError, Result};
pub use reddy_search::{AggregatedResultSet, Provider, SearchResult};

/// Search results for a query, rendered into an LLM-ready payload.
#[derive(Debug, Clone)]
pub struct PreparedPrompt {
    pub results: AggregatedResultSet,
    pub context: String,
    pub messages: Vec<ChatMessage>,
}

/// Search for `query` and build the context block and chat messages.
///
/// # Errors
///
/// Returns [`ReddyError::EmptyQuery`] for a blank query, or a search
/// configuration error. Provider failures only shrink the result set.
pub async fn prepare_prompt(query: &str, config: &AppConfig) -> Result<PreparedPrompt> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ReddyError::EmptyQuery);
    }

    let results = reddy_search::search(query, &config.search_config()).await?;
    tracing::info!(count = results.len(), "search complete");

    let context = build_context(
        results.as_slice(),
        &ContextOptions::from(&config.context),
    );
    let messages = build_messages(query, &context, &config.context.system_prompt);

    Ok(PreparedPrompt {
        results,
        context,
        messages,
    })
}
