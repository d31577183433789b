//! Environment configuration.
//!
//! The binary is driven entirely by environment variables, matching how it
//! runs as a scheduled CI job. Only the repository coordinates and token
//! are required; the target branch defaults to `master`.

use thiserror::Error;

use crate::types::RepoId;

/// The branch PRs must target to be kept current, unless overridden.
pub const DEFAULT_TARGET_BRANCH: &str = "master";

const ENV_TOKEN: &str = "MERGE_QUEUE_GITHUB_TOKEN";
const ENV_ORGANIZATION: &str = "MERGE_QUEUE_ORGANIZATION";
const ENV_REPOSITORY: &str = "MERGE_QUEUE_REPOSITORY";
const ENV_TARGET_BRANCH: &str = "MERGE_QUEUE_TARGET_BRANCH";

/// Errors loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Runtime configuration for one queue pass.
#[derive(Clone)]
pub struct Config {
    /// GitHub token used to authenticate API calls.
    pub token: String,

    /// The repository whose PRs are kept current.
    pub repo: RepoId,

    /// The single base branch the queue serves.
    pub target_branch: String,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            get(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        Ok(Config {
            token: required(ENV_TOKEN)?,
            repo: RepoId::new(required(ENV_ORGANIZATION)?, required(ENV_REPOSITORY)?),
            target_branch: get(ENV_TARGET_BRANCH)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TARGET_BRANCH.to_string()),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token deliberately omitted.
        f.debug_struct("Config")
            .field("repo", &self.repo)
            .field("target_branch", &self.target_branch)
            .finish_non_exhaustive()
    }
}
