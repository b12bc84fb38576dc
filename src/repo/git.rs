//! `git` CLI backed repository

use crate::error::{Error, Result};
use crate::repo::LocalRepository;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::debug;

/// Local repository driven by the `git` binary
#[derive(Debug, Clone)]
pub struct GitRepository {
    root: PathBuf,
}

impl GitRepository {
    /// Operate on the repository containing `root`
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn git(&self, args: &[&str]) -> std::io::Result<Output> {
        debug!(?args, root = %self.root.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
    }
}

/// First line of stderr, or the exit status when git printed nothing
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr
        .lines()
        .find(|l| !l.trim().is_empty())
        .map_or_else(|| output.status.to_string(), |l| l.trim().to_string())
}

impl LocalRepository for GitRepository {
    fn list_branches(&self) -> Result<Vec<String>> {
        let output = self
            .git(&["branch", "--list"])
            .map_err(|e| Error::BranchListing(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            return Err(Error::BranchListing(failure_message(&output)));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::BranchListing(format!("invalid UTF-8 in git output: {e}")))?;
        let lines: Vec<String> = stdout.lines().map(String::from).collect();
        debug!(count = lines.len(), "listed local branches");
        Ok(lines)
    }

    fn delete_branch(&self, name: &str) -> Result<()> {
        let deletion_error = |message: String| Error::BranchDeletion {
            branch: name.to_string(),
            message,
        };

        let output = self
            .git(&["branch", "-D", name])
            .map_err(|e| deletion_error(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            return Err(deletion_error(failure_message(&output)));
        }

        debug!(branch = name, "deleted local branch");
        Ok(())
    }
}
