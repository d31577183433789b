//! Core domain types for the merge queue.

mod ids;
mod pr;

pub use ids::{PrNumber, RepoId, Sha};
pub use pr::{BranchState, PullRequest};
