//! clir: cross-language document search service.
//!
//! This crate hosts the [`clir_search`] ranking core behind an HTTP API:
//! Config → Data → Ranker → HTTP server
//!
//! # Architecture
//!
//! - **Config**: TOML service settings (listener, top-k, data file)
//! - **Data**: the corpus and its translation table, built in or from JSON
//! - **Server**: `POST /api/search` via `axum`, sharing one read-only ranker
//! - **Client**: a `reqwest` client for the same endpoint

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod server;

pub use client::{ClientError, SearchClient};
pub use config::{DataConfig, ServerConfig, ServiceConfig};
pub use data::SearchData;
pub use error::{Result, ServiceError};
pub use server::{SearchServer, router};
