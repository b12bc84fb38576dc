//! Shared setup for the sweep command

use gh_sweep::auth::get_github_auth;
use gh_sweep::error::{Error, Result};
use gh_sweep::platform::{GitHubService, PlatformService, resolve_repo_identity};
use gh_sweep::repo::{GitRepository, LocalRepository, sanitize_branches};
use gh_sweep::types::RepoIdentity;
use tracing::debug;

/// Everything resolved once before the first branch is looked at
///
/// - GitHub token from `gh auth token`
/// - Repository identity from `gh repo view`
/// - Local branches from `git branch`, minus the default branch
pub struct CommandContext {
    /// Local repository in the working directory
    pub repo: GitRepository,
    /// GitHub service for the current repository
    pub platform: Box<dyn PlatformService>,
    /// Candidate branches, in `git branch` order
    pub branches: Vec<String>,
}

impl CommandContext {
    /// Resolve the context for the current working directory
    ///
    /// Any failure here is fatal to the run.
    pub fn new() -> Result<Self> {
        let auth = get_github_auth()?;
        let identity = resolve_repo_identity()?;

        let cwd = std::env::current_dir()
            .map_err(|e| Error::Internal(format!("failed to read working directory: {e}")))?;
        let repo = GitRepository::open(cwd);
        let raw_branches = repo.list_branches()?;
        let branches = sanitize_branches(&raw_branches, &identity.default_branch);
        debug!(
            candidates = branches.len(),
            listed = raw_branches.len(),
            "sanitized branches"
        );

        let platform = GitHubService::new(&auth.token, identity, None)?;

        Ok(Self {
            repo,
            platform: Box::new(platform),
            branches,
        })
    }

    /// The repository being swept
    pub fn identity(&self) -> &RepoIdentity {
        self.platform.config()
    }
}
