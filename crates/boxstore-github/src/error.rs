//! GitHub contents client error types.

/// Errors from GitHub contents API calls.
#[derive(Debug, thiserror::Error)]
pub enum RemoteStoreError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// GitHub returned a non-success status. Carries the upstream response
    /// body verbatim.
    #[error("GitHub {endpoint} returned {status}: {body}")]
    Remote {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The contents response envelope was not valid JSON.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The file payload could not be decoded from base64/UTF-8.
    ///
    /// Note the asymmetry: a payload that decodes cleanly but is not valid
    /// JSON is NOT an error — `fetch` substitutes an empty document instead.
    #[error("failed to decode file content from {endpoint}: {detail}")]
    Content { endpoint: String, detail: String },
}
