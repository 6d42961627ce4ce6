//! Typed client for the GitHub repository contents API.
//!
//! The document lives as a single JSON file at a fixed path inside the
//! configured repository. Both operations address the same endpoint:
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/repos/{owner}/{repo}/contents/{path}` | Read file + blob SHA |
//! | PUT    | `/repos/{owner}/{repo}/contents/{path}` | Create or overwrite file |
//!
//! GitHub transports file content as base64 with embedded newlines; the
//! payload is whitespace-stripped before decoding.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::Value;

use crate::config::GithubStoreConfig;
use crate::error::RemoteStoreError;

/// Commit message recorded for every write.
const COMMIT_MESSAGE: &str = "Update boxes via API";

/// Contents response envelope, reduced to the fields this client reads.
///
/// The live API returns many more fields (`name`, `path`, `size`, links);
/// `serde(deny_unknown_fields)` is intentionally NOT used.
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    sha: String,
    #[serde(default)]
    content: String,
}

/// Client for the GitHub contents API.
#[derive(Debug, Clone)]
pub struct GithubStore {
    http: reqwest::Client,
    config: GithubStoreConfig,
}

impl GithubStore {
    /// Create a new contents client from configuration.
    ///
    /// The underlying HTTP client carries the `Authorization` and `Accept`
    /// headers on every request. GitHub rejects requests without a
    /// User-Agent, so one is always set.
    pub fn new(config: GithubStoreConfig) -> Result<Self, RemoteStoreError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("boxstore/", env!("CARGO_PKG_VERSION")))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&format!(
                        "token {}",
                        config.token.as_str()
                    ))
                    .map_err(|e| RemoteStoreError::Content {
                        endpoint: "client_init".into(),
                        detail: format!("token is not a valid header value: {e}"),
                    })?,
                );
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/vnd.github.v3+json"),
                );
                headers
            })
            .build()
            .map_err(|e| RemoteStoreError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self { http, config })
    }

    /// Full URL of the document file's contents endpoint.
    fn contents_url(&self) -> String {
        format!(
            "{}repos/{}/{}/contents/{}",
            self.config.api_base, self.config.owner, self.config.repo, self.config.file_path
        )
    }

    /// Fetch the current document and its blob SHA.
    ///
    /// Calls `GET {api_base}/repos/{owner}/{repo}/contents/{path}`.
    ///
    /// - A 404 means the file does not exist yet: returns an empty document
    ///   and no SHA, signaling create semantics on the next [`store`].
    /// - Stored content that decodes but does not parse as JSON is silently
    ///   replaced by an empty document; the SHA is still returned so the
    ///   next write overwrites the malformed file.
    ///
    /// [`store`]: GithubStore::store
    pub async fn fetch(&self) -> Result<(Value, Option<String>), RemoteStoreError> {
        let endpoint = format!("GET /contents/{}", self.config.file_path);
        let url = self.contents_url();

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteStoreError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok((Value::Array(vec![]), None));
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteStoreError::Remote {
                endpoint,
                status,
                body,
            });
        }

        let envelope: ContentsResponse =
            resp.json()
                .await
                .map_err(|e| RemoteStoreError::Deserialization {
                    endpoint: endpoint.clone(),
                    source: e,
                })?;

        let text = decode_content(&envelope.content).map_err(|detail| {
            RemoteStoreError::Content {
                endpoint: endpoint.clone(),
                detail,
            }
        })?;

        let document = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                // Malformed stored JSON is downgraded to an empty document,
                // not surfaced as an error. The SHA is kept so the next
                // write replaces the file instead of conflicting.
                tracing::warn!(
                    file = %self.config.file_path,
                    "stored content is not valid JSON, treating as empty: {e}"
                );
                Value::Array(vec![])
            }
        };

        Ok((document, Some(envelope.sha)))
    }

    /// Overwrite the document, creating the file if it does not exist.
    ///
    /// Calls `PUT {api_base}/repos/{owner}/{repo}/contents/{path}` with the
    /// base64-encoded pretty-printed JSON. `sha` must be the value returned
    /// by the immediately preceding [`fetch`], or `None` for a first write.
    /// GitHub rejects a stale SHA (409); that rejection is surfaced as
    /// [`RemoteStoreError::Remote`] and never retried.
    ///
    /// [`fetch`]: GithubStore::fetch
    pub async fn store(
        &self,
        document: &Value,
        sha: Option<&str>,
    ) -> Result<(), RemoteStoreError> {
        let endpoint = format!("PUT /contents/{}", self.config.file_path);
        let url = self.contents_url();

        let mut payload = serde_json::json!({
            "message": COMMIT_MESSAGE,
            "content": encode_content(document),
        });
        if let Some(sha) = sha {
            payload["sha"] = Value::String(sha.to_string());
        }

        let resp = self
            .http
            .put(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RemoteStoreError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        // GitHub returns 200 for an update and 201 for a create; anything
        // else is a failure, including the 409 stale-SHA rejection.
        let status = resp.status();
        if status != reqwest::StatusCode::OK && status != reqwest::StatusCode::CREATED {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteStoreError::Remote {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Decode a contents-API base64 payload into text.
///
/// GitHub wraps base64 at 60 columns; all ASCII whitespace is stripped
/// before decoding.
fn decode_content(content: &str) -> Result<String, String> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| format!("invalid base64: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("content is not UTF-8: {e}"))
}

/// Encode a document for upload: pretty-printed JSON, then base64.
fn encode_content(document: &Value) -> String {
    // Value serialization cannot fail; fall back to the compact form
    // rather than propagating an impossible error.
    let text = serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string());
    BASE64.encode(text.as_bytes())
}
