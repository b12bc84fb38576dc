//! Sweep execution - effectful operations
//!
//! Walks the sanitized branches one at a time: fetch, plan, then delete or
//! report. Progress is pushed to a [`SweepProgress`] as it happens so that
//! output for earlier branches survives a fatal error on a later one.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::repo::LocalRepository;
use crate::sweep::fetch::fetch_pull_requests;
use crate::sweep::plan::{BranchPlan, DeleteReason, plan_branch};
use crate::types::SweepOptions;
use tracing::debug;

/// Something the sweep did or found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepEvent {
    /// Pull requests for the branch are being fetched
    Checking {
        /// Branch name
        branch: String,
    },
    /// The branch has no pull requests and is left alone
    NoPullRequests {
        /// Branch name
        branch: String,
    },
    /// The branch goes despite closed, unmerged pull requests
    ///
    /// Only emitted when force mode is what makes the branch deletable. A
    /// branch with closed pull requests that an open one keeps alive gets
    /// no announcement, even with force on.
    ForcingClosed {
        /// Branch name
        branch: String,
    },
    /// About to delete the branch
    Deleting {
        /// Branch name
        branch: String,
    },
    /// Safe mode kept the branch
    DeletionSkipped {
        /// Branch name
        branch: String,
    },
    /// The branch was deleted
    Deleted {
        /// Branch name
        branch: String,
    },
    /// `git branch -D` failed; the sweep moves on
    DeletionFailed {
        /// Branch name
        branch: String,
        /// Failure description
        message: String,
    },
    /// Kept because of open pull requests
    OpenPullRequests {
        /// Branch name
        branch: String,
        /// URLs of the unmerged pull requests
        urls: Vec<String>,
    },
    /// Kept because of closed pull requests (force mode would delete it)
    ClosedPullRequests {
        /// Branch name
        branch: String,
        /// URLs of the closed pull requests
        urls: Vec<String>,
    },
}

/// Receiver for sweep progress
pub trait SweepProgress: Send + Sync {
    /// Called for every event, in order
    fn on_event(&self, event: &SweepEvent);
}

/// Branch names by outcome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Deleted branches
    pub deleted: Vec<String>,
    /// Branches safe mode would have deleted
    pub would_delete: Vec<String>,
    /// Branches kept because of open or closed pull requests
    pub kept: Vec<String>,
    /// Branches without any pull request
    pub without_prs: Vec<String>,
    /// Branches whose deletion failed
    pub failed: Vec<String>,
}

impl SweepSummary {
    /// Total branches looked at
    pub fn total(&self) -> usize {
        self.deleted.len()
            + self.would_delete.len()
            + self.kept.len()
            + self.without_prs.len()
            + self.failed.len()
    }
}

/// What happened to a branch handed to [`delete_branch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// Branch removed
    Deleted,
    /// Safe mode, nothing touched
    Skipped,
    /// Deletion failed and was reported
    Failed,
}

/// Delete a local branch (best-effort)
///
/// Always announces the deletion first. Failures are reported through
/// `progress` and never returned.
pub fn delete_branch(
    repo: &dyn LocalRepository,
    branch: &str,
    safe: bool,
    progress: &dyn SweepProgress,
) -> DeletionOutcome {
    progress.on_event(&SweepEvent::Deleting {
        branch: branch.to_string(),
    });

    if safe {
        progress.on_event(&SweepEvent::DeletionSkipped {
            branch: branch.to_string(),
        });
        return DeletionOutcome::Skipped;
    }

    match repo.delete_branch(branch) {
        Ok(()) => {
            progress.on_event(&SweepEvent::Deleted {
                branch: branch.to_string(),
            });
            DeletionOutcome::Deleted
        }
        Err(e) => {
            debug!(branch, error = %e, "branch deletion failed");
            progress.on_event(&SweepEvent::DeletionFailed {
                branch: branch.to_string(),
                message: e.to_string(),
            });
            DeletionOutcome::Failed
        }
    }
}

/// Sweep the given branches (EFFECTFUL)
///
/// Branches are handled strictly in order. A pull request fetch failure
/// aborts the sweep immediately; a deletion failure does not.
pub async fn execute_sweep(
    branches: &[String],
    platform: &dyn PlatformService,
    repo: &dyn LocalRepository,
    options: SweepOptions,
    progress: &dyn SweepProgress,
) -> Result<SweepSummary> {
    let mut summary = SweepSummary::default();

    for branch in branches {
        progress.on_event(&SweepEvent::Checking {
            branch: branch.clone(),
        });

        let prs = fetch_pull_requests(platform, branch).await?;
        let plan = plan_branch(&prs, platform.config(), &options);
        debug!(branch = %branch, %plan, "planned branch");

        match plan {
            BranchPlan::NoPullRequests => {
                progress.on_event(&SweepEvent::NoPullRequests {
                    branch: branch.clone(),
                });
                summary.without_prs.push(branch.clone());
            }
            BranchPlan::Delete(reason) => {
                if reason == DeleteReason::ForcedClosed {
                    progress.on_event(&SweepEvent::ForcingClosed {
                        branch: branch.clone(),
                    });
                }
                let bucket = match delete_branch(repo, branch, options.safe, progress) {
                    DeletionOutcome::Deleted => &mut summary.deleted,
                    DeletionOutcome::Skipped => &mut summary.would_delete,
                    DeletionOutcome::Failed => &mut summary.failed,
                };
                bucket.push(branch.clone());
            }
            BranchPlan::Keep {
                open_pr_urls,
                closed_pr_urls,
            } => {
                if let Some(urls) = open_pr_urls {
                    progress.on_event(&SweepEvent::OpenPullRequests {
                        branch: branch.clone(),
                        urls,
                    });
                }
                if let Some(urls) = closed_pr_urls {
                    progress.on_event(&SweepEvent::ClosedPullRequests {
                        branch: branch.clone(),
                        urls,
                    });
                }
                summary.kept.push(branch.clone());
            }
        }
    }

    Ok(summary)
}
