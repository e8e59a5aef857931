//! Context block and chat payload construction.
//!
//! Turns aggregated search results into the text block handed to the
//! LLM, and wraps it with the query into `[system, user]` messages.

use reddy_search::SearchResult;
use serde::{Deserialize, Serialize};

use crate::config::ContextConfig;

/// Shown instead of a context block when the search found nothing.
pub const NO_RESULTS: &str = "No search results found";

/// Rendering limits for [`build_context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    pub max_results: usize,
    pub max_snippet_chars: usize,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self::from(&ContextConfig::default())
    }
}

impl From<&ContextConfig> for ContextOptions {
    fn from(config: &ContextConfig) -> Self {
        Self {
            max_results: config.max_results,
            max_snippet_chars: config.max_snippet_chars,
        }
    }
}

/// Render the top results as a bulleted context block.
///
/// Each entry is a bullet title line followed by the indented snippet
/// and source URL. Empty titles read `No title` and empty URLs `#`.
pub fn build_context(results: &[SearchResult], options: &ContextOptions) -> String {
    if results.is_empty() || options.max_results == 0 {
        return NO_RESULTS.to_owned();
    }

    results
        .iter()
        .take(options.max_results)
        .map(|r| {
            let title = if r.title.is_empty() { "No title" } else { r.title.as_str() };
            let url = if r.url.trim().is_empty() { "#" } else { r.url.as_str() };
            format!(
                "• {title}\n  {}\n  Source: {url}",
                truncate_chars(&r.snippet, options.max_snippet_chars)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `…`.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}…", text[..byte_idx].trim_end()),
        None => text.to_owned(),
    }
}

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message in the chat-completion payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Build the `[system, user]` messages for the LLM.
pub fn build_messages(query: &str, context: &str, system_prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: Role::System,
            content: system_prompt.to_owned(),
        },
        ChatMessage {
            role: Role::User,
            content: format!("Query: {query}\nContext:\n{context}"),
        },
    ]
}
