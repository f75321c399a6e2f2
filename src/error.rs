//! Error types for the clir search service.

use clir_search::SearchError;

/// Top-level error type for the search service host.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Invalid configuration, or a corpus/translation file that fails validation.
    #[error("config error: {0}")]
    Config(String),

    /// HTTP server startup error.
    #[error("server error: {0}")]
    Server(String),

    /// Ranking error surfaced from the search core.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = ServiceError::Config("duplicate document id: 1".into());
        assert_eq!(err.to_string(), "config error: duplicate document id: 1");
    }

    #[test]
    fn search_error_converts() {
        let err: ServiceError = SearchError::Config("top_k must be greater than 0".into()).into();
        assert_eq!(
            err.to_string(),
            "search error: config error: top_k must be greater than 0"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ServiceError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServiceError>();
    }
}
