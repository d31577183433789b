//! Merge Queue Bot - keeps auto-merge pull requests up to date with their base branch.
//!
//! This library provides the eligibility filter and update driver; the
//! `github` module supplies the octocrab-backed host implementation.

pub mod config;
pub mod github;
pub mod queue;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
