//! Deletion planning - pure functions deciding a branch's fate
//!
//! No I/O happens here; the pull requests are fetched beforehand by the
//! executor, which makes every rule unit-testable.

use crate::types::{PullRequestSet, RepoIdentity, SweepOptions};

/// Why a branch may be deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteReason {
    /// Every pull request from the branch was merged
    AllMerged,
    /// Only closed, unmerged pull requests remain and force mode is on
    ForcedClosed,
}

/// What to do with a single branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchPlan {
    /// The branch never had a pull request; leave it alone
    NoPullRequests,
    /// Delete the branch
    Delete(DeleteReason),
    /// Keep the branch. Both fields may be set at once.
    Keep {
        /// Unmerged PR URLs, present when some PR is still open
        open_pr_urls: Option<Vec<String>>,
        /// Closed-unmerged PR URLs, present when some PR was closed
        closed_pr_urls: Option<Vec<String>>,
    },
}

impl std::fmt::Display for BranchPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPullRequests => write!(f, "skip (no pull requests)"),
            Self::Delete(DeleteReason::AllMerged) => write!(f, "delete (all merged)"),
            Self::Delete(DeleteReason::ForcedClosed) => write!(f, "delete (forced, closed)"),
            Self::Keep {
                open_pr_urls,
                closed_pr_urls,
            } => {
                write!(f, "keep")?;
                let reasons: Vec<&str> = [
                    open_pr_urls.as_ref().map(|_| "open pull requests"),
                    closed_pr_urls.as_ref().map(|_| "closed pull requests"),
                ]
                .into_iter()
                .flatten()
                .collect();
                if !reasons.is_empty() {
                    write!(f, " ({})", reasons.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// Core deletion rule
///
/// `all_merged || (any_closed && none_open && force)`
pub fn can_delete(prs: &PullRequestSet, force: bool) -> bool {
    prs.all_merged() || (prs.any_closed() && !prs.any_open() && force)
}

/// Plan a branch from its pull requests (PURE - no I/O)
pub fn plan_branch(prs: &PullRequestSet, repo: &RepoIdentity, options: &SweepOptions) -> BranchPlan {
    if prs.is_empty() {
        return BranchPlan::NoPullRequests;
    }

    if can_delete(prs, options.force) {
        let reason = if prs.all_merged() {
            DeleteReason::AllMerged
        } else {
            DeleteReason::ForcedClosed
        };
        return BranchPlan::Delete(reason);
    }

    BranchPlan::Keep {
        open_pr_urls: prs
            .any_open()
            .then(|| prs.unmerged_urls(&repo.owner, &repo.name)),
        closed_pr_urls: prs
            .any_closed()
            .then(|| prs.closed_urls(&repo.owner, &repo.name)),
    }
}
