mod api;
mod assets;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use config::Args;
use log::{info, warn};
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let settings = Args::parse().into_settings()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));

    info!("Images from {}", settings.display_dir.display());
    info!("Assets from {}", settings.assets.describe());
    if settings.dev_mode {
        warn!("Development mode: serving front end from disk");
    }

    let state = Arc::new(AppState::from_settings(settings)?);
    let app = routes::create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Serving prayer display on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped unexpectedly")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
