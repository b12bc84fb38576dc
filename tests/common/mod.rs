//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;
mod mock_repo;

pub use mock_platform::MockPlatformService;
pub use mock_repo::{MockRepository, RecordingProgress};

use gh_sweep::types::{PrState, PullRequest, RepoIdentity};

/// Repository identity used by the mocks
pub fn repo_identity() -> RepoIdentity {
    RepoIdentity {
        owner: "acme".to_string(),
        name: "widgets".to_string(),
        default_branch: "main".to_string(),
    }
}

/// Build a pull request
pub const fn make_pr(number: u64, merged: bool, state: PrState) -> PullRequest {
    PullRequest {
        number,
        merged,
        state,
    }
}

/// A merged pull request
pub const fn merged_pr(number: u64) -> PullRequest {
    make_pr(number, true, PrState::Merged)
}

/// An open pull request
pub const fn open_pr(number: u64) -> PullRequest {
    make_pr(number, false, PrState::Open)
}

/// A pull request closed without merging
pub const fn closed_pr(number: u64) -> PullRequest {
    make_pr(number, false, PrState::Closed)
}

/// Owned branch names
pub fn branches(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}
