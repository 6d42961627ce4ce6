//! # boxstore-github — GitHub contents API client for boxstore
//!
//! Persists the box document as a single JSON file in a GitHub repository,
//! using the repository contents API instead of a database:
//!
//! - `GET /repos/{owner}/{repo}/contents/{path}` returns the file's current
//!   content (base64) together with its blob SHA.
//! - `PUT /repos/{owner}/{repo}/contents/{path}` overwrites the file; the
//!   previous SHA must be echoed back or GitHub rejects the write (409).
//!
//! The SHA is the only concurrency control in the system. It is fetched
//! immediately before every write and never cached across requests; GitHub
//! is the sole authority on conflict detection, and a rejected write is
//! surfaced to the caller rather than retried.

pub mod config;
pub mod contents;
pub mod error;

pub use config::GithubStoreConfig;
pub use contents::GithubStore;
pub use error::RemoteStoreError;
