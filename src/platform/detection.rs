//! Resolve the current GitHub repository through `gh repo view`

use crate::error::{Error, Result};
use crate::types::RepoIdentity;
use serde::Deserialize;
use std::process::Command;
use tracing::debug;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepoView {
    name: String,
    owner: RepoOwner,
    default_branch_ref: Option<BranchRef>,
}

#[derive(Deserialize)]
struct RepoOwner {
    login: String,
}

#[derive(Deserialize)]
struct BranchRef {
    name: String,
}

/// Ask the `gh` CLI which repository the working directory belongs to
pub fn resolve_repo_identity() -> Result<RepoIdentity> {
    debug!("resolving repository via gh repo view");
    let output = Command::new("gh")
        .args(["repo", "view", "--json", "owner,name,defaultBranchRef"])
        .output()
        .map_err(|e| Error::RepoResolution(format!("failed to run 'gh repo view': {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::RepoResolution(format!(
            "'gh repo view' exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|e| Error::RepoResolution(format!("invalid UTF-8 in gh output: {e}")))?;
    let identity = parse_repo_view(&stdout)?;
    debug!(repo = %identity, default_branch = %identity.default_branch, "resolved repository");
    Ok(identity)
}

/// Parse `gh repo view --json owner,name,defaultBranchRef` output
pub fn parse_repo_view(json: &str) -> Result<RepoIdentity> {
    let view: RepoView = serde_json::from_str(json)
        .map_err(|e| Error::RepoResolution(format!("failed to parse gh output: {e}")))?;

    let default_branch = view
        .default_branch_ref
        .map(|r| r.name)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            Error::RepoResolution(format!(
                "{}/{} has no default branch",
                view.owner.login, view.name
            ))
        })?;

    Ok(RepoIdentity {
        owner: view.owner.login,
        name: view.name,
        default_branch,
    })
}
