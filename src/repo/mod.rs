//! Local git repository access
//!
//! Branch listing and deletion go through [`LocalRepository`] so the sweep
//! can run against an in-memory repository in tests.

mod git;

pub use git::GitRepository;

use crate::error::Result;

/// Local branch operations needed by the sweep
pub trait LocalRepository: Send + Sync {
    /// Raw `git branch` output lines, markers and padding included
    fn list_branches(&self) -> Result<Vec<String>>;

    /// Force-delete a local branch
    fn delete_branch(&self, name: &str) -> Result<()>;
}

/// Markers `git branch` puts in front of the current branch and of branches
/// checked out in another worktree
const BRANCH_MARKERS: [&str; 2] = ["* ", "+ "];

/// Turn raw branch listing lines into deletion candidates
///
/// Strips the current-branch marker and whitespace, then drops empty lines
/// and the default branch. Order is preserved.
pub fn sanitize_branches<S: AsRef<str>>(raw_lines: &[S], default_branch: &str) -> Vec<String> {
    raw_lines
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            let unmarked = BRANCH_MARKERS
                .iter()
                .find_map(|marker| line.strip_prefix(marker))
                .unwrap_or(line);
            let name = unmarked.trim();
            (!name.is_empty() && name != default_branch).then(|| name.to_string())
        })
        .collect()
}
