//! HTTP front for the ranking core.
//!
//! ## Endpoints
//!
//! - `POST /api/search` — rank the corpus against `{"query": "..."}` and
//!   return the top results as a JSON array
//!
//! Blank queries get `400 {"detail": "Search query cannot be empty"}`.
//! Ranking is synchronous and runs to completion inside the handler; the
//! shared [`Ranker`] is read-only, so handlers never lock.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use clir_search::{Ranker, SearchError};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ServiceError;

/// Message returned to clients for an empty or whitespace-only query.
pub const EMPTY_QUERY_MESSAGE: &str = "Search query cannot be empty";

/// Message returned to clients for unexpected ranking failures.
const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your search";

/// Body of a `POST /api/search` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query. A missing field is treated like an empty query.
    #[serde(default)]
    pub query: String,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable explanation.
    pub detail: String,
}

/// Shared state for axum handlers.
#[derive(Clone)]
struct AppState {
    ranker: Arc<Ranker>,
}

/// Build the search router around a shared ranker.
pub fn router(ranker: Arc<Ranker>) -> Router {
    Router::new()
        .route("/api/search", post(handle_search))
        .with_state(AppState { ranker })
}

/// A running search HTTP server.
///
/// Serves in a background tokio task; dropping the value stops the server.
pub struct SearchServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl SearchServer {
    /// Start the search server.
    ///
    /// Binds to `{config.host}:{config.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(ranker: Arc<Ranker>, config: &ServerConfig) -> crate::error::Result<Self> {
        let app = router(ranker);

        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServiceError::Server(format!("bind {bind_addr} failed: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| ServiceError::Server(format!("failed to get local addr: {e}")))?;

        info!("search server listening on http://{addr}/api/search");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("search server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Base URL for clients, e.g. `http://127.0.0.1:5000`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for SearchServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// `POST /api/search` — rank the corpus against the query.
async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Response {
    tracing::trace!(query = %request.query, "search request");

    match state.ranker.rank(&request.query) {
        Ok(results) => {
            tracing::debug!(count = results.len(), "search served");
            Json(results).into_response()
        }
        Err(SearchError::InvalidQuery(_)) => {
            tracing::debug!("rejected empty query");
            error_response(StatusCode::BAD_REQUEST, EMPTY_QUERY_MESSAGE)
        }
        Err(e) => {
            tracing::error!(error = %e, "search failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}

fn error_response(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.to_owned(),
        }),
    )
        .into_response()
}
