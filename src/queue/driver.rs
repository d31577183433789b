//! The update driver: one pass over the open PR set.
//!
//! A pass lists open PRs, filters them for eligibility, and requests a
//! branch update for each. The pass is stateless and idempotent on retry:
//! re-running after a partial failure converges because branches that did
//! get updated are excluded as up to date next time.

use tokio_util::sync::CancellationToken;

use crate::types::PrNumber;

use super::QueueError;
use super::filter::filter_eligible;
use super::host::CodeHost;

/// Outcome of one driver pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Number of open PRs listed.
    pub open: usize,

    /// Number of PRs that passed the eligibility filter.
    pub eligible: usize,

    /// Number of branch updates the host accepted.
    pub updated: usize,

    /// PRs whose branch update the host rejected. These are expected to be
    /// retried on the next scheduled pass.
    pub failed: Vec<PrNumber>,
}

/// Runs one update pass.
///
/// Fatal errors are failing to list open PRs or failing to build the SHA
/// cache during filtering. Individual branch-update failures are logged
/// with the PR number and collected in the summary; they never abort the
/// remainder of the pass.
pub async fn run_pass<H: CodeHost>(
    host: &H,
    target_branch: &str,
    cancel: &CancellationToken,
) -> Result<PassSummary, QueueError<H::Error>> {
    if cancel.is_cancelled() {
        return Err(QueueError::Cancelled);
    }
    let pulls = host
        .list_open_pull_requests()
        .await
        .map_err(QueueError::ListPullRequests)?;
    let open = pulls.len();

    let eligible = filter_eligible(host, pulls, target_branch, cancel).await?;

    let mut summary = PassSummary {
        open,
        eligible: eligible.len(),
        ..PassSummary::default()
    };

    for pull in &eligible {
        if cancel.is_cancelled() {
            return Err(QueueError::Cancelled);
        }
        match host.update_branch(pull.number).await {
            Ok(()) => {
                tracing::info!(pr = %pull.number, "updated branch");
                summary.updated += 1;
            }
            Err(error) => {
                // One PR's failure must never block its siblings; the next
                // scheduled pass retries it.
                tracing::warn!(pr = %pull.number, error = %error, "failed to update branch");
                summary.failed.push(pull.number);
            }
        }
    }

    tracing::info!(
        open = summary.open,
        eligible = summary.eligible,
        updated = summary.updated,
        failed = summary.failed.len(),
        "pass complete"
    );
    Ok(summary)
}
