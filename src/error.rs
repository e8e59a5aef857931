//! Error types for reddy.

/// Top-level error type for the search-to-prompt flow.
#[derive(Debug, thiserror::Error)]
pub enum ReddyError {
    /// Configuration file could not be parsed or serialised.
    #[error("config error: {0}")]
    Config(String),

    /// The query was empty or whitespace.
    #[error("query must not be empty")]
    EmptyQuery,

    /// The search layer rejected its configuration.
    #[error(transparent)]
    Search(#[from] reddy_search::SearchError),

    /// Logging could not be initialised.
    #[error("logging error: {0}")]
    Logging(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ReddyError>;
