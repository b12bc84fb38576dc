//! GitHub token retrieval via `gh auth token`

use crate::error::{Error, Result};
use std::process::Command;
use tracing::debug;

/// GitHub credentials for API calls
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Personal access or OAuth token
    pub token: String,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Ask the `gh` CLI for the token of the logged-in user
pub fn get_github_auth() -> Result<GitHubAuthConfig> {
    debug!("requesting token from gh CLI");
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .map_err(|e| Error::Auth(format!("failed to run 'gh auth token': {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Auth(format!(
            "'gh auth token' exited with {}: {}. Run 'gh auth login' first.",
            output.status,
            stderr.trim()
        )));
    }

    let token = parse_token_output(&output.stdout)?;
    debug!("got token from gh CLI");
    Ok(GitHubAuthConfig { token })
}

/// Extract the token from `gh auth token` stdout
pub fn parse_token_output(stdout: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(stdout)
        .map_err(|e| Error::Auth(format!("invalid UTF-8 in gh auth token output: {e}")))?;
    let token = text.trim();
    if token.is_empty() {
        return Err(Error::Auth(
            "gh returned an empty token. Run 'gh auth login' first.".to_string(),
        ));
    }
    Ok(token.to_string())
}
