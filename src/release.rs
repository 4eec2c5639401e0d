//! Release run: fetch PRs, build the release section, rewrite the changelog.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::changelog::{
    format_pulls_list, merge_entries, read_changelog, render_entries, splice_release,
    write_changelog,
};
use crate::error::ReleaseError;
use crate::github::{PullRequest, PullRequestSource};

/// Machine-readable output for downstream workflow steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseOutput {
    pub pulls_list_md: String,
}

impl ReleaseOutput {
    /// Serialize to a single JSON line.
    pub fn to_json_line(&self) -> Result<String, ReleaseError> {
        serde_json::to_string(self).map_err(ReleaseError::Output)
    }
}

/// Release section content and PR listing built from one PR sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub section: String,
    pub pulls_list_md: String,
}

/// Build the release notes for `version` from PRs ordered oldest first.
pub fn synthesize(pulls: &[PullRequest], version: &str) -> ReleaseNotes {
    let entries = merge_entries(pulls);
    info!(
        "Collected {} changelog line(s) from {} PR(s)",
        entries.len(),
        pulls.len()
    );

    ReleaseNotes {
        section: render_entries(&entries, version),
        pulls_list_md: format_pulls_list(pulls),
    }
}

/// Result of a successful release run.
#[derive(Debug)]
pub struct ReleaseReport {
    pub output: ReleaseOutput,
    pub changed_paths: Vec<PathBuf>,
}

/// Add a release section for `version`, dated `date`, to the changelog at `changelog_path`.
///
/// The changelog is only written once the PR list has been fetched and the
/// new document fully built.
pub async fn run_release(
    source: &dyn PullRequestSource,
    changelog_path: &Path,
    version: &str,
    date: &str,
) -> Result<ReleaseReport, ReleaseError> {
    let existing = read_changelog(changelog_path)?;

    let pulls = source.list_pulls_since_release().await?;
    let notes = synthesize(&pulls, version);

    let new_changelog = splice_release(&existing, version, date, &notes.section);
    write_changelog(changelog_path, &new_changelog)?;
    debug!(
        "Wrote release {} to {}",
        version,
        changelog_path.display()
    );

    Ok(ReleaseReport {
        output: ReleaseOutput {
            pulls_list_md: notes.pulls_list_md,
        },
        changed_paths: vec![changelog_path.to_path_buf()],
    })
}
