//! Error types for the clir-search crate.
//!
//! The ranking core signals exactly one runtime condition, an empty query.
//! Configuration problems are reported when a [`crate::Ranker`] is built,
//! never while a query is being ranked.

/// Errors that can occur while ranking documents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The query was empty or contained only whitespace.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid ranking configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns true if the caller can recover by asking for a new query.
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, Self::InvalidQuery(_))
    }
}

/// Convenience type alias for clir-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
