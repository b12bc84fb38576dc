//! Platform services for GitHub
//!
//! Provides the pull request lookups the sweep needs, behind a trait so the
//! sweep can be driven by an in-memory platform in tests.

mod detection;
mod github;

pub use detection::{parse_repo_view, resolve_repo_identity};
pub use github::{GitHubService, PAGE_SIZE};

use crate::error::Result;
use crate::types::{PullRequestPage, RepoIdentity};
use async_trait::async_trait;

/// Platform service trait for pull request queries
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Fetch one page of pull requests whose head is `head_branch`
    ///
    /// `cursor` is `None` for the first page and the previous page's
    /// `end_cursor` afterwards.
    async fn find_pull_requests_page(
        &self,
        head_branch: &str,
        cursor: Option<&str>,
    ) -> Result<PullRequestPage>;

    /// The repository this service queries
    fn config(&self) -> &RepoIdentity;
}
