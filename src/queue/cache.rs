//! Per-pass cache of base-branch tip SHAs.
//!
//! Checking whether a PR is up to date requires the current tip of its base
//! branch. With 100+ open PRs mostly targeting the same branch, fetching the
//! tip per PR would hammer the host API; the cache collapses N PRs against
//! the same base branch into exactly one fetch.
//!
//! The cache is scoped to a single pass and is read-only once built, so no
//! PR's decision can be affected by a later PR's side effect within the
//! same pass.

use std::collections::HashMap;

use tokio_util::sync::CancellationToken;

use crate::types::{PullRequest, Sha};

use super::QueueError;
use super::host::CodeHost;

/// A mapping from base-branch name to its current tip SHA.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaCache {
    entries: HashMap<String, Sha>,
}

impl ShaCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached tip SHA for a branch, if present.
    pub fn get(&self, branch: &str) -> Option<&Sha> {
        self.entries.get(branch)
    }

    /// Returns true if the branch has a cached entry.
    pub fn contains(&self, branch: &str) -> bool {
        self.entries.contains_key(branch)
    }

    /// Inserts a branch tip into the cache.
    pub fn insert(&mut self, branch: impl Into<String>, sha: Sha) {
        self.entries.insert(branch.into(), sha);
    }

    /// Returns the number of distinct branches cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, Sha); N]> for ShaCache {
    fn from(entries: [(&str, Sha); N]) -> Self {
        let mut cache = ShaCache::new();
        for (branch, sha) in entries {
            cache.insert(branch, sha);
        }
        cache
    }
}

/// Builds the SHA cache for one filtering pass.
///
/// Fetches the tip of each distinct base-branch name among `pulls` exactly
/// once. Any single fetch failure aborts the whole pass: a partial cache
/// would silently produce stale filtering decisions.
pub async fn build_sha_cache<H: CodeHost>(
    host: &H,
    pulls: &[PullRequest],
    cancel: &CancellationToken,
) -> Result<ShaCache, QueueError<H::Error>> {
    let mut cache = ShaCache::new();

    for pull in pulls {
        if cache.contains(&pull.base_ref) {
            continue;
        }
        if cancel.is_cancelled() {
            return Err(QueueError::Cancelled);
        }
        let branch = host.get_branch(&pull.base_ref).await.map_err(|source| {
            QueueError::FetchBranch {
                branch: pull.base_ref.clone(),
                source,
            }
        })?;
        cache.insert(pull.base_ref.clone(), branch.sha);
    }

    Ok(cache)
}
