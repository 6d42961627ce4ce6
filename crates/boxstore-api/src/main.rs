//! # boxstore-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to configurable port (default 8080).

use boxstore_api::state::{AppConfig, AppState};
use boxstore_github::{GithubStore, GithubStoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment. Missing GitHub credentials are
    // not rejected here — they fail at the GitHub boundary on first use.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let store_config = GithubStoreConfig::from_env().map_err(|e| {
        tracing::error!("GitHub store configuration failed: {e}");
        e
    })?;
    let store = GithubStore::new(store_config).map_err(|e| {
        tracing::error!("GitHub client initialization failed: {e}");
        e
    })?;

    let state = AppState::with_config(store, AppConfig { port });
    let app = boxstore_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("boxstore API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
