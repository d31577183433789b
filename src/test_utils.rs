//! Shared test utilities: fixture builders, arbitrary generators, and a
//! mock code host.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::queue::CodeHost;
use crate::types::{BranchState, PrNumber, PullRequest, Sha};

/// A 40-hex SHA derived from a small number, for readable fixtures.
pub fn sha(n: u64) -> Sha {
    Sha::new(format!("{:0>40x}", n))
}

/// An open, non-fork, auto-merge PR against `base_ref` with the given
/// recorded base SHA.
pub fn pr(number: u64, base_ref: &str, base_sha: Sha) -> PullRequest {
    PullRequest {
        number: PrNumber(number),
        author: "dev".to_string(),
        repository: "repo".to_string(),
        head_ref: format!("feature-{}", number),
        head_sha: sha(number + 1000),
        base_ref: base_ref.to_string(),
        base_sha,
        fork: false,
        auto_merge: true,
    }
}

pub fn arb_sha() -> impl Strategy<Value = Sha> {
    "[0-9a-f]{40}".prop_map(Sha::new)
}

pub fn arb_branch_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9/-]{0,20}".prop_map(String::from)
}

pub fn arb_pull_request() -> impl Strategy<Value = PullRequest> {
    (
        any::<u64>().prop_map(PrNumber),
        "[a-z]{1,8}",
        "[a-z]{1,8}",
        arb_branch_name(),
        arb_sha(),
        arb_branch_name(),
        arb_sha(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(number, author, repository, head_ref, head_sha, base_ref, base_sha, fork, auto_merge)| {
                PullRequest {
                    number,
                    author,
                    repository,
                    head_ref,
                    head_sha,
                    base_ref,
                    base_sha,
                    fork,
                    auto_merge,
                }
            },
        )
}

/// Error returned by [`MockHost`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct MockHostError(pub String);

/// An in-memory [`CodeHost`] that records every call.
///
/// Branches not registered via `with_branch` fail to fetch; updates for PRs
/// registered via `with_failing_update` are rejected.
#[derive(Debug, Default)]
pub struct MockHost {
    pulls: Vec<PullRequest>,
    branches: HashMap<String, Sha>,
    failing_updates: HashSet<PrNumber>,
    fail_list: bool,
    cancel_on_branch_fetch: Option<CancellationToken>,
    list_calls: AtomicUsize,
    branch_fetches: Mutex<Vec<String>>,
    updates: Mutex<Vec<PrNumber>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pulls(mut self, pulls: Vec<PullRequest>) -> Self {
        self.pulls = pulls;
        self
    }

    pub fn with_branch(mut self, name: &str, sha: Sha) -> Self {
        self.branches.insert(name.to_string(), sha);
        self
    }

    pub fn with_failing_update(mut self, number: PrNumber) -> Self {
        self.failing_updates.insert(number);
        self
    }

    pub fn with_failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Cancels the given token whenever a branch is fetched, simulating an
    /// interrupt arriving mid-pass.
    pub fn with_cancel_on_branch_fetch(mut self, token: CancellationToken) -> Self {
        self.cancel_on_branch_fetch = Some(token);
        self
    }

    /// Branch names fetched, in call order.
    pub fn branch_fetches(&self) -> Vec<String> {
        self.branch_fetches.lock().unwrap().clone()
    }

    /// PRs whose update succeeded, in call order.
    pub fn updates(&self) -> Vec<PrNumber> {
        self.updates.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

impl CodeHost for MockHost {
    type Error = MockHostError;

    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>, Self::Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(MockHostError("listing failed".to_string()));
        }
        Ok(self.pulls.clone())
    }

    async fn get_branch(&self, name: &str) -> Result<BranchState, Self::Error> {
        self.branch_fetches.lock().unwrap().push(name.to_string());
        if let Some(token) = &self.cancel_on_branch_fetch {
            token.cancel();
        }
        match self.branches.get(name) {
            Some(sha) => Ok(BranchState {
                name: name.to_string(),
                sha: sha.clone(),
            }),
            None => Err(MockHostError(format!("branch {} not found", name))),
        }
    }

    async fn update_branch(&self, number: PrNumber) -> Result<(), Self::Error> {
        if self.failing_updates.contains(&number) {
            return Err(MockHostError(format!("update rejected for {}", number)));
        }
        self.updates.lock().unwrap().push(number);
        Ok(())
    }
}
