//! GitHub-backed implementation of the code-host seam.
//!
//! Provides a repo-scoped octocrab wrapper and its `CodeHost`
//! implementation. Transport concerns (auth, TLS, timeouts) live in
//! octocrab; the queue itself performs no in-pass retry.

mod client;
mod error;
mod host;

pub use client::GitHubClient;
pub use error::GitHubApiError;
