#![warn(clippy::pedantic)]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ironlog_server::catalog::InMemoryCatalog;
use ironlog_server::config::Config;
use ironlog_server::{AppState, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let state = AppState {
        catalog: Arc::new(InMemoryCatalog::seeded()),
        sessions: Arc::new(config.session_store()?),
    };

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
