//! Eligibility filtering for branch updates.
//!
//! A PR is updated only if it opted into auto-merge, targets the configured
//! branch, is not from a fork, and is behind the base branch tip. The
//! predicate is pure; the surrounding pass builds the SHA cache first and
//! then filters against it, preserving input order.

use tokio_util::sync::CancellationToken;

use crate::types::PullRequest;

use super::QueueError;
use super::cache::{ShaCache, build_sha_cache};
use super::host::CodeHost;

/// Why a PR was skipped, in evaluation order.
///
/// The first failing condition wins; a forked PR targeting the wrong branch
/// reports `Fork`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The head branch lives in another repository; updates can't push there.
    Fork,

    /// The PR targets a branch other than the configured one.
    WrongBaseBranch,

    /// The recorded base SHA matches the base branch tip.
    UpToDate,

    /// The author has not enabled auto-merge.
    AutoMergeDisabled,
}

/// Returns why `pull` should be skipped, or `None` if it is eligible.
pub fn skip_reason(
    pull: &PullRequest,
    cache: &ShaCache,
    target_branch: &str,
) -> Option<SkipReason> {
    // The update mechanism cannot push to fork-owned branches.
    if pull.fork {
        return Some(SkipReason::Fork);
    }
    // Only the configured target branch is kept current.
    if pull.base_ref != target_branch {
        return Some(SkipReason::WrongBaseBranch);
    }
    // A cache miss is not "up to date": the cache is built from this same
    // PR set, so a miss should be unreachable, but if it happens the PR
    // falls through to the remaining checks rather than being dropped.
    if let Some(branch_sha) = cache.get(&pull.base_ref) {
        if pull.base_sha == *branch_sha {
            return Some(SkipReason::UpToDate);
        }
    }
    if !pull.auto_merge {
        return Some(SkipReason::AutoMergeDisabled);
    }
    None
}

/// Returns true if `pull` should have its branch updated.
pub fn can_update(pull: &PullRequest, cache: &ShaCache, target_branch: &str) -> bool {
    skip_reason(pull, cache, target_branch).is_none()
}

/// Filters `pulls` down to the subset eligible for a branch update.
///
/// Builds the per-pass SHA cache (one branch fetch per distinct base ref),
/// then applies [`can_update`] to each PR in input order. The output
/// preserves input order. Any branch fetch failure is fatal to the pass;
/// a partial, possibly-stale result is never returned.
pub async fn filter_eligible<H: CodeHost>(
    host: &H,
    pulls: Vec<PullRequest>,
    target_branch: &str,
    cancel: &CancellationToken,
) -> Result<Vec<PullRequest>, QueueError<H::Error>> {
    let cache = build_sha_cache(host, &pulls, cancel).await?;

    let mut eligible = Vec::new();
    for pull in pulls {
        match skip_reason(&pull, &cache, target_branch) {
            None => eligible.push(pull),
            Some(reason) => {
                tracing::debug!(
                    pr = %pull.number,
                    ?reason,
                    base_sha = pull.base_sha.short(),
                    "skipping pull request"
                );
            }
        }
    }

    Ok(eligible)
}
