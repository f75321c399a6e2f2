//! HTTP client for the search API.
//!
//! [`SearchClient`] posts queries to `POST /api/search` and maps every
//! failure to a [`ClientError`] with a stable code, so callers can tell a
//! rejected query from an unreachable service without parsing messages.

use clir_search::ScoredResult;

use crate::config::ServerConfig;
use crate::server::{EMPTY_QUERY_MESSAGE, SearchRequest};

/// Stable error codes for programmatic error handling.
pub mod error_codes {
    /// The query was rejected before it was sent.
    pub const INVALID_INPUT: &str = "INVALID_INPUT";

    /// The service could not be reached or the response could not be read.
    pub const CONNECTION_ERROR: &str = "CONNECTION_ERROR";

    /// The service answered 2xx with a body that is not a result list.
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
}

/// Errors produced by [`SearchClient`].
///
/// The Display impl formats as `[CODE] message`; API errors use the HTTP
/// status as their code.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Empty or whitespace-only query, rejected locally.
    #[error("[{}] {}", error_codes::INVALID_INPUT, .0)]
    InvalidQuery(String),

    /// The service answered with a non-success status.
    #[error("[{status}] {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `detail`, or a fallback description.
        message: String,
    },

    /// The request never produced a readable response.
    #[error("[{}] {}", error_codes::CONNECTION_ERROR, .0)]
    Connection(String),

    /// A success response whose body could not be decoded.
    #[error("[{}] {}", error_codes::DECODE_ERROR, .0)]
    Decode(String),
}

impl ClientError {
    /// Returns the stable code for this error.
    ///
    /// API errors report their HTTP status, e.g. `"400"`.
    pub fn code(&self) -> String {
        match self {
            Self::InvalidQuery(_) => error_codes::INVALID_INPUT.to_owned(),
            Self::Api { status, .. } => status.to_string(),
            Self::Connection(_) => error_codes::CONNECTION_ERROR.to_owned(),
            Self::Decode(_) => error_codes::DECODE_ERROR.to_owned(),
        }
    }

    /// Returns the inner message without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidQuery(m) | Self::Connection(m) | Self::Decode(m) => m,
            Self::Api { message, .. } => message,
        }
    }
}

/// Client for a running search service.
#[derive(Debug, Clone)]
pub struct SearchClient {
    base_url: String,
    client: reqwest::Client,
}

impl SearchClient {
    /// Create a client for the service at `base_url`, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client for a server bound with `config`.
    pub fn for_server(config: &ServerConfig) -> Self {
        Self::new(format!("http://{}", config.bind_addr()))
    }

    /// The service base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the service for `query`.
    ///
    /// A 2xx body that is valid JSON but not an array yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidQuery`] for a blank query (nothing is sent)
    /// - [`ClientError::Api`] for a non-2xx response
    /// - [`ClientError::Connection`] if the request or body read fails
    /// - [`ClientError::Decode`] if a 2xx body is not a result list
    pub async fn search(&self, query: &str) -> Result<Vec<ScoredResult>, ClientError> {
        if query.trim().is_empty() {
            return Err(ClientError::InvalidQuery(EMPTY_QUERY_MESSAGE.to_owned()));
        }

        let url = format!("{}/api/search", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&SearchRequest {
                query: query.to_owned(),
            })
            .send()
            .await
            .map_err(|e| {
                ClientError::Connection(format!("unable to connect to the search service: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ClientError::Connection(format!("failed to read search response: {e}"))
        })?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "search request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_detail(status.as_u16(), &body),
            });
        }

        parse_results(&body)
    }
}

/// Pull the `detail` field out of an error body.
fn extract_detail(status: u16, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("detail")
            .and_then(|d| d.as_str())
            .map(String::from)
            .unwrap_or_else(|| "Search request failed".to_owned()),
        Err(_) => format!("HTTP error! status: {status}"),
    }
}

fn parse_results(body: &str) -> Result<Vec<ScoredResult>, ClientError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ClientError::Decode(format!("invalid JSON: {e}")))?;
    if !value.is_array() {
        tracing::debug!("search response was not a list, treating as empty");
        return Ok(Vec::new());
    }
    serde_json::from_value(value)
        .map_err(|e| ClientError::Decode(format!("unexpected result shape: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ClientError::InvalidQuery("x".into()).code(), "INVALID_INPUT");
        assert_eq!(ClientError::Connection("x".into()).code(), "CONNECTION_ERROR");
        assert_eq!(ClientError::Decode("x".into()).code(), "DECODE_ERROR");
        let api = ClientError::Api {
            status: 400,
            message: "bad".into(),
        };
        assert_eq!(api.code(), "400");
    }

    #[test]
    fn display_includes_code() {
        let err = ClientError::InvalidQuery(EMPTY_QUERY_MESSAGE.into());
        assert_eq!(err.to_string(), "[INVALID_INPUT] Search query cannot be empty");
        assert_eq!(err.message(), EMPTY_QUERY_MESSAGE);

        let api = ClientError::Api {
            status: 503,
            message: "down".into(),
        };
        assert_eq!(api.to_string(), "[503] down");
        assert_eq!(api.message(), "down");
    }

    #[test]
    fn extract_detail_prefers_detail_field() {
        assert_eq!(extract_detail(400, r#"{"detail":"nope"}"#), "nope");
        assert_eq!(extract_detail(500, r#"{"other":1}"#), "Search request failed");
        assert_eq!(extract_detail(502, "<html>"), "HTTP error! status: 502");
    }

    #[test]
    fn parse_results_accepts_empty_list() {
        assert!(parse_results("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_results_treats_non_list_as_empty() {
        assert!(parse_results(r#"{"results": []}"#).unwrap().is_empty());
    }

    #[test]
    fn parse_results_rejects_garbage() {
        assert!(matches!(parse_results("not json"), Err(ClientError::Decode(_))));
        assert!(matches!(parse_results(r#"[{"id": 1}]"#), Err(ClientError::Decode(_))));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = SearchClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn for_server_uses_bind_addr() {
        let client = SearchClient::for_server(&ServerConfig::default());
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }

    #[tokio::test]
    async fn blank_query_rejected_without_request() {
        // Port 9 (discard) is never contacted: the query is rejected first.
        let client = SearchClient::new("http://127.0.0.1:9");
        let err = client.search("   ").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidQuery(_)));
    }
}
