//! Pull request and branch snapshot types.
//!
//! These are immutable value objects fetched once per pass from the code
//! host; the queue never mutates or persists them.

use serde::{Deserialize, Serialize};

use super::ids::{PrNumber, Sha};

/// A snapshot of an open pull request.
///
/// Ref names come from PR metadata and are user-controlled: anyone can open
/// a PR with an arbitrary branch name. Treat `head_ref` and `base_ref` as
/// untrusted strings; never interpolate them into shell commands or paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// The PR number.
    pub number: PrNumber,

    /// The PR author's login.
    pub author: String,

    /// The name of the repository the PR targets.
    pub repository: String,

    /// The head branch name. Untrusted.
    pub head_ref: String,

    /// The current head commit SHA.
    pub head_sha: Sha,

    /// The base branch name the PR targets. Untrusted.
    pub base_ref: String,

    /// The base commit SHA recorded on the PR, i.e. the tip of the base
    /// branch as of the last time this PR's merge base was computed.
    pub base_sha: Sha,

    /// True if the head branch lives in a different repository than the base.
    pub fork: bool,

    /// True if the author enabled auto-merge on this PR.
    pub auto_merge: bool,
}

/// The current tip of a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchState {
    /// The branch name.
    pub name: String,

    /// The commit SHA at the branch tip.
    pub sha: Sha,
}
