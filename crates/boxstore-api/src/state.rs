//! Application state.
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. There is no in-process data here: the box
//! document lives entirely in GitHub, and the state carries only the client
//! handle and configuration. Requests are fully independent — the SHA
//! returned by a fetch is never cached across requests.

use boxstore_github::GithubStore;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: `GithubStore` wraps an internally reference-counted
/// `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// GitHub contents client — the sole persistence backend.
    pub store: GithubStore,
    pub config: AppConfig,
}

impl AppState {
    /// Create application state with the given store and default configuration.
    pub fn new(store: GithubStore) -> Self {
        Self {
            store,
            config: AppConfig::default(),
        }
    }

    /// Create application state with the given store and configuration.
    pub fn with_config(store: GithubStore, config: AppConfig) -> Self {
        Self { store, config }
    }
}
