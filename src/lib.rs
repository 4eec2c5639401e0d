//! changelog-release - builds a changelog release section from closed PR descriptions.
//!
//! # Overview
//!
//! Closed pull requests are fetched from GitHub, their descriptions are scanned
//! for `## Added`, `## Fixed`, ... headings, and the lines under those headings
//! become a new dated release section in CHANGELOG.md, inserted right after the
//! `# [Released]` marker.

pub mod changelog;
pub mod config;
pub mod error;
pub mod github;
pub mod release;

// Re-export commonly used types
pub use changelog::{CategorizedEntries, ChangelogCategory};
pub use config::{Config, Repository};
pub use error::{ChangelogError, ConfigError, GitHubError, ReleaseError};
pub use github::{GitHubSource, PullRequest, PullRequestSource};
pub use release::{ReleaseNotes, ReleaseOutput, ReleaseReport, run_release, synthesize};
