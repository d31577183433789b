//! GitHub API error type.
//!
//! One error shape for all three host operations, carrying the HTTP status
//! when it can be determined and the underlying octocrab error. The queue
//! deliberately performs no in-pass retry (a failed update is picked up by
//! the next scheduled pass), so no transient/permanent taxonomy is needed
//! here.

use std::fmt;

use thiserror::Error;

/// A GitHub API error.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The HTTP status code, if available.
    pub status_code: Option<u16>,

    /// A human-readable description of the error.
    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl GitHubApiError {
    /// Wraps an octocrab error.
    pub fn from_octocrab(err: octocrab::Error) -> Self {
        let status_code = Self::extract_status_code(&err);
        Self {
            status_code,
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Extracts the HTTP status code from an octocrab error, if present.
    ///
    /// octocrab's `Error` type doesn't expose a status accessor across all
    /// variants, so only the `GitHub` variant yields a code; everything
    /// else conservatively reports `None`.
    fn extract_status_code(err: &octocrab::Error) -> Option<u16> {
        match err {
            octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
            _ => None,
        }
    }
}
