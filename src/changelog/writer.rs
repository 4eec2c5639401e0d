//! Render release sections and splice them into the changelog document.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use chrono::Local;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ChangelogError;
use crate::github::PullRequest;

use super::format::{CategorizedEntries, ChangelogCategory};
use super::parser::parse_body;

/// Heading that separates the changelog preamble from released versions.
pub const RELEASED_MARKER: &str = "# [Released]";

/// Collect the changelog lines of every PR, in PR order within each category.
pub fn merge_entries(pulls: &[PullRequest]) -> CategorizedEntries {
    let mut merged = CategorizedEntries::new();

    for pull in pulls {
        let entries = parse_body(pull.body_text());
        debug!(
            "PR #{} contributed {} changelog line(s)",
            pull.number,
            entries.len()
        );
        merged.extend(entries);
    }

    merged
}

/// Render the category blocks of a release section.
///
/// Falls back to a single "Bumped version" change when there are no entries.
pub fn render_entries(entries: &CategorizedEntries, version: &str) -> String {
    if entries.is_empty() {
        return format!(
            "### {}\n\n- Bumped version to {}",
            ChangelogCategory::Changes,
            version
        );
    }

    let mut lines: Vec<String> = Vec::with_capacity(entries.len() + 7);
    for (category, category_lines) in entries.iter() {
        lines.push(format!("### {}\n", category));
        lines.extend(category_lines.iter().cloned());
    }

    lines.join("\n")
}

/// Markdown checklist of the PRs included in a release.
pub fn format_pulls_list(pulls: &[PullRequest]) -> String {
    pulls
        .iter()
        .map(|pull| format!("- [x] PR #{}: {}", pull.number, pull.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Insert a new release directly after the released marker.
///
/// Without a marker the whole document becomes the preamble and the marker is
/// appended after it. Everything after the first marker is carried through
/// unchanged.
pub fn splice_release(existing: &str, version: &str, date: &str, section: &str) -> String {
    let (header, footer) = match existing.split_once(RELEASED_MARKER) {
        Some((header, footer)) => (header.to_string(), footer),
        None => (format!("{}\n", existing), ""),
    };

    let mut new_content = String::with_capacity(existing.len() + section.len() + 64);
    new_content.push_str(&header);
    new_content.push_str(RELEASED_MARKER);
    new_content.push_str("\n\n");
    new_content.push_str(&format!("## [{}] - {}\n\n", version, date));
    new_content.push_str(section);
    new_content.push_str(footer);

    new_content
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Read the changelog document.
pub fn read_changelog(path: &Path) -> Result<String, ChangelogError> {
    fs::read_to_string(path).map_err(|source| ChangelogError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the changelog document with `content`.
///
/// The content goes to a temporary file next to the real file (symlinks are
/// followed) that is then renamed over it, so readers see either the old or
/// the new document. The existing file's permissions are kept.
pub fn write_changelog(path: &Path, content: &str) -> Result<(), ChangelogError> {
    let write_err = |source: std::io::Error| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(write_err(e)),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    if let Ok(metadata) = fs::metadata(&target) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_err)?;
    }
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(&target).map_err(|e| write_err(e.error))?;

    Ok(())
}
