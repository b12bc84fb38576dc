//! Core types for gh-sweep

use serde::{Deserialize, Serialize};

/// Pull request state as reported by the GitHub GraphQL API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrState {
    /// PR is still open
    Open,
    /// PR was closed (usually without merging)
    Closed,
    /// PR was merged
    Merged,
}

impl std::fmt::Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

/// A pull request whose head is one of the local branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Whether the PR was merged. Authoritative over `state`.
    pub merged: bool,
    /// Current state of the PR
    pub state: PrState,
}

/// All pull requests found for a single head branch, in API order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSet {
    prs: Vec<PullRequest>,
}

impl PullRequestSet {
    /// Wrap fetched pull requests
    pub const fn new(prs: Vec<PullRequest>) -> Self {
        Self { prs }
    }

    /// Branch has no pull requests at all
    pub fn is_empty(&self) -> bool {
        self.prs.is_empty()
    }

    /// Number of pull requests
    pub fn len(&self) -> usize {
        self.prs.len()
    }

    /// Iterate in API order
    pub fn iter(&self) -> std::slice::Iter<'_, PullRequest> {
        self.prs.iter()
    }

    /// Every PR is merged. Vacuously true for an empty set.
    pub fn all_merged(&self) -> bool {
        self.prs.iter().all(|pr| pr.merged)
    }

    /// At least one PR reports `CLOSED`
    pub fn any_closed(&self) -> bool {
        self.prs.iter().any(|pr| pr.state == PrState::Closed)
    }

    /// At least one PR reports `OPEN`
    pub fn any_open(&self) -> bool {
        self.prs.iter().any(|pr| pr.state == PrState::Open)
    }

    /// Web URLs of every PR that is not merged (open or closed)
    pub fn unmerged_urls(&self, owner: &str, repo: &str) -> Vec<String> {
        self.prs
            .iter()
            .filter(|pr| !pr.merged)
            .map(|pr| pr_url(owner, repo, pr.number))
            .collect()
    }

    /// Web URLs of every PR that reports `CLOSED`, merged or not
    pub fn closed_urls(&self, owner: &str, repo: &str) -> Vec<String> {
        self.prs
            .iter()
            .filter(|pr| pr.state == PrState::Closed)
            .map(|pr| pr_url(owner, repo, pr.number))
            .collect()
    }
}

impl FromIterator<PullRequest> for PullRequestSet {
    fn from_iter<I: IntoIterator<Item = PullRequest>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PullRequestSet {
    type Item = &'a PullRequest;
    type IntoIter = std::slice::Iter<'a, PullRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Web URL of a pull request on github.com
pub fn pr_url(owner: &str, repo: &str, number: u64) -> String {
    format!("https://github.com/{owner}/{repo}/pull/{number}")
}

/// One page of the pull requests query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestPage {
    /// Pull requests on this page
    pub nodes: Vec<PullRequest>,
    /// Cursor to pass as `after` for the next page
    pub end_cursor: Option<String>,
    /// Whether the server has more pages
    pub has_next_page: bool,
}

/// The GitHub repository the local checkout belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Default branch name (e.g., "main")
    pub default_branch: String,
}

impl std::fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// How aggressively branches get removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOptions {
    /// Report deletions without running them
    pub safe: bool,
    /// Also delete branches whose PRs are all closed without merging
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn pr(number: u64, merged: bool, state: PrState) -> PullRequest {
        PullRequest {
            number,
            merged,
            state,
        }
    }

    #[test]
    fn test_pr_url_format() {
        assert_eq!(
            pr_url("acme", "widgets", 42),
            "https://github.com/acme/widgets/pull/42"
        );
    }

    #[test]
    fn test_empty_set_predicates() {
        let set = PullRequestSet::default();
        assert!(set.all_merged());
        assert!(!set.any_closed());
        assert!(!set.any_open());
        assert!(set.unmerged_urls("o", "r").is_empty());
    }

    #[test]
    fn test_unmerged_and_closed_urls_differ() {
        let set = PullRequestSet::new(vec![
            pr(1, false, PrState::Open),
            pr(2, false, PrState::Closed),
            pr(3, true, PrState::Merged),
        ]);

        assert_eq!(
            set.unmerged_urls("acme", "widgets"),
            vec![
                "https://github.com/acme/widgets/pull/1",
                "https://github.com/acme/widgets/pull/2",
            ]
        );
        assert_eq!(
            set.closed_urls("acme", "widgets"),
            vec!["https://github.com/acme/widgets/pull/2"]
        );
    }

    #[test]
    fn test_merged_pr_reported_closed_counts_for_both() {
        // Older API versions report merged PRs as CLOSED
        let set = PullRequestSet::new(vec![pr(7, true, PrState::Closed)]);
        assert!(set.all_merged());
        assert!(set.any_closed());
        assert_eq!(
            set.closed_urls("o", "r"),
            vec!["https://github.com/o/r/pull/7"]
        );
        assert!(set.unmerged_urls("o", "r").is_empty());
    }

    #[test]
    fn test_state_deserializes_from_graphql_enum() {
        let parsed: PullRequest =
            serde_json::from_str(r#"{"number": 5, "merged": false, "state": "CLOSED"}"#).unwrap();
        assert_eq!(parsed, pr(5, false, PrState::Closed));
    }
}
