//! Error types for gh-sweep

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sweeping branches
///
/// Everything except [`Error::BranchDeletion`] aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Could not obtain a GitHub token from the `gh` CLI
    #[error("failed to get GitHub token: {0}")]
    Auth(String),

    /// Could not resolve owner, name or default branch of the current repo
    #[error("failed to get current GitHub repo: {0}")]
    RepoResolution(String),

    /// Could not list local git branches
    #[error("failed to get branches: {0}")]
    BranchListing(String),

    /// Querying pull requests for a branch failed
    #[error("error getting pull requests for branch {branch}: {message}")]
    PullRequestFetch {
        /// Branch whose pull requests were being fetched
        branch: String,
        /// Underlying failure
        message: String,
    },

    /// Deleting a local branch failed
    #[error("failed to delete branch {branch}: {message}")]
    BranchDeletion {
        /// Branch that could not be deleted
        branch: String,
        /// Underlying failure
        message: String,
    },

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Internal failure (runtime or client setup)
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}
