//! hp-catalog: serve the catalog document over HTTP.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use hp_catalog::{http, JsonFileStore};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = if cli.create_if_missing {
        JsonFileStore::open_or_create(&cli.db)
    } else {
        JsonFileStore::open(&cli.db)
    }
    .with_context(|| format!("opening catalog document {}", cli.db.display()))?;

    let listener = TcpListener::bind(&cli.listen)
        .await
        .with_context(|| format!("binding {}", cli.listen))?;
    info!(
        addr = %listener.local_addr()?,
        db = %store.path().display(),
        "serving catalog"
    );

    http::serve(Arc::new(store), listener, shutdown_signal()).await?;
    Ok(())
}
