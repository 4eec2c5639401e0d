//! The pull request source consumed by a release run.

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::info;

use crate::config::Config;
use crate::error::GitHubError;

use super::prs::{PullRequest, build_client, fetch_closed_prs_with_client};

/// Anything that can list the PRs closed since the last release.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Closed PRs, oldest first.
    async fn list_pulls_since_release(&self) -> Result<Vec<PullRequest>, GitHubError>;
}

/// A [`PullRequestSource`] backed by the GitHub REST API.
pub struct GitHubSource {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubSource {
    pub fn new(client: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Build a source from the process configuration.
    pub fn from_config(config: &Config) -> Result<Self, GitHubError> {
        let client = build_client(&config.token, config.api_url.as_deref())?;
        Ok(Self::new(
            client,
            &config.repository.owner,
            &config.repository.name,
        ))
    }
}

#[async_trait]
impl PullRequestSource for GitHubSource {
    async fn list_pulls_since_release(&self) -> Result<Vec<PullRequest>, GitHubError> {
        let mut pulls = fetch_closed_prs_with_client(&self.client, &self.owner, &self.repo).await?;
        info!(
            "Found {} closed PRs in {}/{}",
            pulls.len(),
            self.owner,
            self.repo
        );

        // GitHub lists newest first
        pulls.reverse();
        Ok(pulls)
    }
}
