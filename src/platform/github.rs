//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestPage, RepoIdentity};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::debug;

/// Pull requests requested per GraphQL page
pub const PAGE_SIZE: u32 = 100;

const PULL_REQUESTS_QUERY: &str = r"
    query BranchPullRequests(
        $owner: String!
        $name: String!
        $branch: String!
        $first: Int!
        $cursor: String
    ) {
        repository(owner: $owner, name: $name) {
            pullRequests(headRefName: $branch, first: $first, after: $cursor) {
                nodes {
                    number
                    merged
                    state
                }
                pageInfo {
                    endCursor
                    hasNextPage
                }
            }
        }
    }
";

// GraphQL response types for the pull requests query

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct PullRequestsData {
    repository: Option<RepositoryNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    pull_requests: PullRequestConnection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestConnection {
    nodes: Option<Vec<Option<PullRequest>>>,
    page_info: PageInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    end_cursor: Option<String>,
    has_next_page: bool,
}

impl From<PullRequestConnection> for PullRequestPage {
    fn from(conn: PullRequestConnection) -> Self {
        Self {
            nodes: conn.nodes.unwrap_or_default().into_iter().flatten().collect(),
            end_cursor: conn.page_info.end_cursor,
            has_next_page: conn.page_info.has_next_page,
        }
    }
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: RepoIdentity,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `base_uri` overrides the API root (`https://api.github.com`).
    pub fn new(token: &str, config: RepoIdentity, base_uri: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder.base_uri(uri)?;
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn find_pull_requests_page(
        &self,
        head_branch: &str,
        cursor: Option<&str>,
    ) -> Result<PullRequestPage> {
        debug!(head_branch, cursor = ?cursor, "querying pull requests page");

        let response: GraphQlResponse<PullRequestsData> = self
            .client
            .graphql(&serde_json::json!({
                "query": PULL_REQUESTS_QUERY,
                "variables": {
                    "owner": self.config.owner,
                    "name": self.config.name,
                    "branch": head_branch,
                    "first": PAGE_SIZE,
                    "cursor": cursor,
                }
            }))
            .await
            .map_err(|e| Error::GitHubApi(format!("GraphQL query failed: {e}")))?;

        // Check for GraphQL errors
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::GitHubApi(format!(
                "GraphQL error: {}",
                messages.join(", ")
            )));
        }

        let repository = response
            .data
            .ok_or_else(|| Error::GitHubApi("No data in GraphQL response".to_string()))?
            .repository
            .ok_or_else(|| {
                Error::GitHubApi(format!("repository {} not found", self.config))
            })?;

        let page = PullRequestPage::from(repository.pull_requests);
        debug!(
            head_branch,
            count = page.nodes.len(),
            has_next_page = page.has_next_page,
            "got pull requests page"
        );
        Ok(page)
    }

    fn config(&self) -> &RepoIdentity {
        &self.config
    }
}
