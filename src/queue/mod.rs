//! The merge queue: eligibility filtering and the update driver.
//!
//! One pass = list open PRs, build the per-pass SHA cache, filter, then
//! request a branch update per eligible PR, tolerating per-PR failures.

mod cache;
mod driver;
mod filter;
mod host;

use thiserror::Error;

pub use cache::{ShaCache, build_sha_cache};
pub use driver::{PassSummary, run_pass};
pub use filter::{SkipReason, can_update, filter_eligible, skip_reason};
pub use host::CodeHost;

/// Fatal errors for a whole pass.
///
/// Per-PR update failures are deliberately absent: they are recovered
/// locally by the driver and surface only in logs and [`PassSummary`].
#[derive(Debug, Error)]
pub enum QueueError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Listing open pull requests failed.
    #[error("failed to list open pull requests")]
    ListPullRequests(#[source] E),

    /// Fetching a base branch tip during cache construction failed.
    #[error("failed to fetch branch {branch}")]
    FetchBranch {
        branch: String,
        #[source]
        source: E,
    },

    /// The pass was aborted by the cancellation signal.
    #[error("pass cancelled")]
    Cancelled,
}
