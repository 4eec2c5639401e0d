//! GitHub API operations using octocrab.

pub mod prs;
pub mod source;

pub use prs::{PullRequest, build_client, fetch_closed_prs_with_client};
pub use source::{GitHubSource, PullRequestSource};
