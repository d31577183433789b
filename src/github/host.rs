//! `CodeHost` implementation backed by the GitHub REST API.
//!
//! Listing uses a raw GET instead of octocrab's typed pulls API because the
//! typed `PullRequest` model doesn't expose the `auto_merge` field; we
//! deserialize exactly the fields the queue needs. Branch updates go
//! through the `pulls/{n}/update-branch` endpoint via octocrab's handler.

use serde::Deserialize;

use crate::queue::CodeHost;
use crate::types::{BranchState, PrNumber, PullRequest, Sha};

use super::client::GitHubClient;
use super::error::GitHubApiError;

/// GitHub returns at most 100 items per page.
const PER_PAGE: usize = 100;

// ─── Wire Types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: u64,
    user: Option<RawUser>,
    head: RawRef,
    base: RawRef,
    /// GitHub attaches an object here when auto-merge is enabled and `null`
    /// otherwise; only presence matters to the queue.
    auto_merge: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RawRef {
    #[serde(rename = "ref")]
    ref_field: String,
    sha: String,
    /// `null` when the head repository was deleted.
    repo: Option<RawRepo>,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawBranch {
    name: String,
    commit: RawCommit,
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    sha: String,
}

// ─── Mapping ──────────────────────────────────────────────────────────────────

fn convert_pull(raw: RawPullRequest) -> PullRequest {
    // A PR whose head repository differs from its base repository is a
    // fork. A deleted head repository also counts: there is nothing left
    // to push an update to.
    let fork = match (&raw.head.repo, &raw.base.repo) {
        (Some(head), Some(base)) => head.id != base.id,
        _ => true,
    };

    PullRequest {
        number: PrNumber(raw.number),
        author: raw.user.map(|u| u.login).unwrap_or_default(),
        repository: raw
            .base
            .repo
            .as_ref()
            .map(|r| r.name.clone())
            .unwrap_or_default(),
        head_ref: raw.head.ref_field,
        head_sha: Sha::new(raw.head.sha),
        base_ref: raw.base.ref_field,
        base_sha: Sha::new(raw.base.sha),
        fork,
        auto_merge: raw.auto_merge.is_some(),
    }
}

// ─── CodeHost Implementation ──────────────────────────────────────────────────

impl CodeHost for GitHubClient {
    type Error = GitHubApiError;

    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>, Self::Error> {
        let mut page = 1u32;
        let mut all_pulls = Vec::new();

        loop {
            let route = format!(
                "/repos/{}/{}/pulls?state=open&per_page={}&page={}",
                self.owner(),
                self.repo_name(),
                PER_PAGE,
                page
            );
            let items: Vec<RawPullRequest> = self
                .inner()
                .get(route, None::<&()>)
                .await
                .map_err(GitHubApiError::from_octocrab)?;

            let is_last_page = items.len() < PER_PAGE;
            all_pulls.extend(items.into_iter().map(convert_pull));

            if is_last_page {
                break;
            }
            page += 1;
        }

        Ok(all_pulls)
    }

    async fn get_branch(&self, name: &str) -> Result<BranchState, Self::Error> {
        let route = format!(
            "/repos/{}/{}/branches/{}",
            self.owner(),
            self.repo_name(),
            name
        );
        let branch: RawBranch = self
            .inner()
            .get(route, None::<&()>)
            .await
            .map_err(GitHubApiError::from_octocrab)?;

        Ok(BranchState {
            name: branch.name,
            sha: Sha::new(branch.commit.sha),
        })
    }

    async fn update_branch(&self, number: PrNumber) -> Result<(), Self::Error> {
        self.inner()
            .pulls(self.owner(), self.repo_name())
            .update_branch(number.0)
            .await
            .map(|_| ())
            .map_err(GitHubApiError::from_octocrab)
    }
}
