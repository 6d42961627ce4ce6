//! GitHub store configuration.
//!
//! Read once from the environment at startup and immutable thereafter.
//! The credential, owner, and repo variables are deliberately NOT validated
//! here: a missing `GITHUB_TOKEN` (or owner/repo) surfaces as an
//! authentication or not-found failure on the first remote call, matching
//! the deployed behavior of this service.

use url::Url;
use zeroize::Zeroizing;

/// Configuration for the GitHub contents client.
///
/// Custom `Debug` implementation redacts the `token` field to prevent
/// credential leakage in log output.
#[derive(Clone)]
pub struct GithubStoreConfig {
    /// GitHub API base URL. Default: <https://api.github.com>.
    /// Overridable so tests can point at a local mock server.
    pub api_base: Url,
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Personal access token, sent as `Authorization: token <TOKEN>`.
    pub token: Zeroizing<String>,
    /// Path of the document file within the repository.
    pub file_path: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GithubStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubStoreConfig")
            .field("api_base", &self.api_base)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"[REDACTED]")
            .field("file_path", &self.file_path)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GithubStoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GITHUB_API_URL` (default: `https://api.github.com`)
    /// - `GITHUB_USERNAME` (no default — empty if absent)
    /// - `GITHUB_REPO` (no default — empty if absent)
    /// - `GITHUB_TOKEN` (no default — empty if absent)
    /// - `BOXSTORE_FILE_PATH` (default: `dados.json`)
    /// - `BOXSTORE_TIMEOUT_SECS` (default: 30)
    ///
    /// Absent credentials are not an error at load time; every remote call
    /// will fail at the GitHub boundary instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: env_url("GITHUB_API_URL", "https://api.github.com")?,
            owner: std::env::var("GITHUB_USERNAME").unwrap_or_default(),
            repo: std::env::var("GITHUB_REPO").unwrap_or_default(),
            token: Zeroizing::new(std::env::var("GITHUB_TOKEN").unwrap_or_default()),
            file_path: std::env::var("BOXSTORE_FILE_PATH")
                .unwrap_or_else(|_| "dados.json".to_string()),
            timeout_secs: std::env::var("BOXSTORE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base` cannot be parsed.
    pub fn for_base(base: &str, owner: &str, repo: &str, token: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: Url::parse(base)
                .map_err(|e| ConfigError::InvalidUrl("base".to_string(), e.to_string()))?,
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: Zeroizing::new(token.to_string()),
            file_path: "dados.json".to_string(),
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
