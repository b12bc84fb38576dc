//! Branch sweep engine
//!
//! Three-phase pattern per branch:
//! 1. Fetch - page through the branch's pull requests (effectful)
//! 2. Plan - decide whether the branch can go (pure, testable)
//! 3. Execute - delete or report (effectful)

mod execute;
mod fetch;
mod plan;

pub use execute::{
    DeletionOutcome, SweepEvent, SweepProgress, SweepSummary, delete_branch, execute_sweep,
};
pub use fetch::{fetch_pull_requests, pull_request_pages};
pub use plan::{BranchPlan, DeleteReason, can_delete, plan_branch};
