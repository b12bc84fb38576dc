//! Mock platform service for testing

use async_trait::async_trait;
use gh_sweep::error::{Error, Result};
use gh_sweep::platform::PlatformService;
use gh_sweep::types::{PullRequest, PullRequestPage, RepoIdentity};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `find_pull_requests_page`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCall {
    pub head_branch: String,
    pub cursor: Option<String>,
}

/// In-memory platform serving canned pages per branch
///
/// Page `i` of a branch is served for the first request (`i == 0`) or for a
/// request whose cursor equals page `i - 1`'s `end_cursor`. Branches without
/// configured pages get a single empty page.
///
/// Features:
/// - Call tracking for verification
/// - Error injection per branch and page index
pub struct MockPlatformService {
    config: RepoIdentity,
    pages: Mutex<HashMap<String, Vec<PullRequestPage>>>,
    page_calls: Mutex<Vec<PageCall>>,
    errors: Mutex<HashMap<(String, usize), String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: RepoIdentity) -> Self {
        Self {
            config,
            pages: Mutex::new(HashMap::new()),
            page_calls: Mutex::new(Vec::new()),
            errors: Mutex::new(HashMap::new()),
        }
    }

    /// Serve `pages` for `branch`, chaining them with generated cursors
    pub fn set_pages(&self, branch: &str, pages: Vec<Vec<PullRequest>>) {
        let last = pages.len().saturating_sub(1);
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, nodes)| PullRequestPage {
                nodes,
                end_cursor: Some(format!("{branch}-cursor-{i}")),
                has_next_page: i < last,
            })
            .collect();
        self.set_raw_pages(branch, pages);
    }

    /// Serve all of `prs` for `branch` as a single page
    pub fn set_prs(&self, branch: &str, prs: Vec<PullRequest>) {
        self.set_pages(branch, vec![prs]);
    }

    /// Serve hand-built pages for `branch`
    pub fn set_raw_pages(&self, branch: &str, pages: Vec<PullRequestPage>) {
        self.pages
            .lock()
            .unwrap()
            .insert(branch.to_string(), pages);
    }

    /// Make the request for page `page_index` of `branch` fail
    pub fn fail_page(&self, branch: &str, page_index: usize, msg: &str) {
        self.errors
            .lock()
            .unwrap()
            .insert((branch.to_string(), page_index), msg.to_string());
    }

    /// All page requests, in order
    pub fn page_calls(&self) -> Vec<PageCall> {
        self.page_calls.lock().unwrap().clone()
    }

    /// Branches that were queried at least once, in first-query order
    pub fn queried_branches(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for call in self.page_calls() {
            if !seen.contains(&call.head_branch) {
                seen.push(call.head_branch);
            }
        }
        seen
    }

    fn page_index(pages: &[PullRequestPage], cursor: Option<&str>) -> Option<usize> {
        match cursor {
            None => Some(0),
            Some(c) => pages
                .iter()
                .position(|p| p.end_cursor.as_deref() == Some(c))
                .map(|i| i + 1),
        }
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn find_pull_requests_page(
        &self,
        head_branch: &str,
        cursor: Option<&str>,
    ) -> Result<PullRequestPage> {
        self.page_calls.lock().unwrap().push(PageCall {
            head_branch: head_branch.to_string(),
            cursor: cursor.map(String::from),
        });

        let pages = self
            .pages
            .lock()
            .unwrap()
            .get(head_branch)
            .cloned()
            .unwrap_or_default();

        let Some(index) = Self::page_index(&pages, cursor) else {
            return Err(Error::GitHubApi(format!("unknown cursor {cursor:?}")));
        };

        if let Some(msg) = self
            .errors
            .lock()
            .unwrap()
            .get(&(head_branch.to_string(), index))
        {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(pages.get(index).cloned().unwrap_or_default())
    }

    fn config(&self) -> &RepoIdentity {
        &self.config
    }
}
