//! Search service binary.
//!
//! Usage: `clir-server [CONFIG_PATH]`
//!
//! Without a path the default config file is used if it exists, otherwise
//! built-in defaults (127.0.0.1:5000, top 5, reference corpus). Logs go to
//! stderr; set `RUST_LOG` to change verbosity.

use std::path::PathBuf;
use std::sync::Arc;

use clir::{SearchData, SearchServer, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("clir-server starting");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ServiceConfig::load_or_default(config_path.as_deref()).map_err(|e| {
        tracing::error!(error = %e, "failed to load config");
        anyhow::anyhow!("clir-server config: {e}")
    })?;

    let data = SearchData::load(&config.data)?;
    let ranker = Arc::new(data.into_ranker(config.search.clone())?);
    tracing::info!(
        documents = ranker.corpus().len(),
        top_k = ranker.config().top_k,
        "ranker ready"
    );

    let server = SearchServer::start(ranker, &config.server).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!(addr = %server.addr(), "shutting down");
    server.shutdown();

    tracing::info!("clir-server shut down cleanly");
    Ok(())
}
