//! The code-host collaborator trait.
//!
//! The queue consumes exactly three operations from the hosting platform.
//! The trait-based seam enables:
//! - Mock hosts for testing
//! - The octocrab-backed implementation in `crate::github`
//!
//! Implementations are repo-scoped: a host is constructed for one
//! organization/repository pair, so the operations don't carry repo
//! arguments.

use std::future::Future;

use crate::types::{BranchState, PrNumber, PullRequest};

/// Operations the merge queue needs from the code host.
///
/// # Example (mock for testing)
///
/// ```ignore
/// struct StaticHost {
///     pulls: Vec<PullRequest>,
///     branches: HashMap<String, Sha>,
/// }
///
/// impl CodeHost for StaticHost {
///     type Error = StaticHostError;
///
///     async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>, Self::Error> {
///         Ok(self.pulls.clone())
///     }
///     // ...
/// }
/// ```
pub trait CodeHost {
    /// The error type returned by this host.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lists all open pull requests in the repository.
    fn list_open_pull_requests(
        &self,
    ) -> impl Future<Output = Result<Vec<PullRequest>, Self::Error>> + Send;

    /// Fetches the current tip of the named branch.
    ///
    /// Fails if the branch does not exist.
    fn get_branch(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<BranchState, Self::Error>> + Send;

    /// Asks the host to update the PR's head branch with the base branch.
    ///
    /// Fails if the host rejects the update (e.g. permissions, conflicts).
    fn update_branch(
        &self,
        number: PrNumber,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
