//! Paginated pull request lookup

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestSet};
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, warn};

/// Where the next page request starts
enum Cursor {
    Start,
    After(String),
    Done,
}

/// Lazily page through every pull request whose head is `head_branch`
///
/// Each call starts a fresh query from the first page. The stream yields
/// the nodes of each non-empty page in order and ends when a page comes
/// back empty or the server reports no further page. A failed request is
/// yielded as the last item.
pub fn pull_request_pages<'a>(
    platform: &'a dyn PlatformService,
    head_branch: &'a str,
) -> impl Stream<Item = Result<Vec<PullRequest>>> + 'a {
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let after = match &cursor {
            Cursor::Start => None,
            Cursor::After(end_cursor) => Some(end_cursor.as_str()),
            Cursor::Done => return Ok::<_, Error>(None),
        };

        let page = platform.find_pull_requests_page(head_branch, after).await?;
        if page.nodes.is_empty() {
            debug!(head_branch, "empty page, stopping");
            return Ok(None);
        }

        let next = match page.end_cursor {
            Some(end_cursor) if page.has_next_page => Cursor::After(end_cursor),
            None if page.has_next_page => {
                warn!(head_branch, "server reported another page without a cursor");
                Cursor::Done
            }
            _ => Cursor::Done,
        };
        Ok(Some((page.nodes, next)))
    })
}

/// Collect every pull request for `head_branch`
///
/// An empty set means the branch never had a pull request; failures are
/// reported as [`Error::PullRequestFetch`].
pub async fn fetch_pull_requests(
    platform: &dyn PlatformService,
    head_branch: &str,
) -> Result<PullRequestSet> {
    let pages: Vec<Vec<PullRequest>> = pull_request_pages(platform, head_branch)
        .try_collect()
        .await
        .map_err(|e| Error::PullRequestFetch {
            branch: head_branch.to_string(),
            message: e.to_string(),
        })?;

    let prs: PullRequestSet = pages.into_iter().flatten().collect();
    debug!(head_branch, count = prs.len(), "fetched pull requests");
    Ok(prs)
}
