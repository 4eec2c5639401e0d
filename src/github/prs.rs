//! PR fetching via octocrab.

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GitHubError;

/// Represents a GitHub PR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
}

impl PullRequest {
    /// The PR description, or an empty string when it has none.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Build an octocrab client authenticated with `token`.
///
/// `base_uri` points the client at a GitHub Enterprise API (or a mock server).
pub fn build_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, GitHubError> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());

    if let Some(uri) = base_uri {
        builder = builder
            .base_uri(uri)
            .map_err(|e| GitHubError::ClientBuild(Box::new(e)))?;
    }

    builder
        .build()
        .map_err(|e| GitHubError::ClientBuild(Box::new(e)))
}

/// Fetch every closed PR of a repository, most recently created first.
///
/// Closed-but-unmerged PRs are included: the platform's `closed` state is the
/// only filter applied.
pub async fn fetch_closed_prs_with_client(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<Vec<PullRequest>, GitHubError> {
    let mut all_prs = Vec::new();
    let mut page = 1u32;

    loop {
        let result = octocrab
            .pulls(owner, repo)
            .list()
            .state(octocrab::params::State::Closed)
            .sort(octocrab::params::pulls::Sort::Created)
            .direction(octocrab::params::Direction::Descending)
            .per_page(100)
            .page(page)
            .send()
            .await;

        let prs_page = result.map_err(|e| classify_error(e, owner, repo))?;

        let items = prs_page.items;
        if items.is_empty() {
            break;
        }

        debug!(page, count = items.len(), "Fetched page of closed PRs");

        all_prs.extend(items.into_iter().map(|pr| PullRequest {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body,
        }));

        // Check if there are more pages
        if prs_page.next.is_none() {
            break;
        }

        page += 1;
    }

    Ok(all_prs)
}

/// Map an octocrab failure onto the error kinds callers care about.
fn classify_error(e: octocrab::Error, owner: &str, repo: &str) -> GitHubError {
    // Check error content using both Display and Debug output
    // to handle different octocrab error formats
    let err_display = e.to_string();
    let err_debug = format!("{:?}", e);

    // GitHub returns 403 with a rate limit message
    if err_display.to_lowercase().contains("rate limit")
        || err_debug.to_lowercase().contains("rate limit")
    {
        return GitHubError::RateLimited {
            reset_time: "unknown".to_string(),
        };
    }

    if err_display.contains("Not Found") || err_debug.contains("Not Found") {
        return GitHubError::RepositoryNotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        };
    }

    GitHubError::FetchPRs(Box::new(e))
}
