//! Extract categorized changelog lines from PR descriptions.

use super::format::{CategorizedEntries, ChangelogCategory};

/// Parse a PR body into changelog lines grouped by category.
///
/// A line starting with `#` that contains a space is a heading: the text after
/// the first space selects the current category when it names one exactly.
/// Headings are never kept as entries, even when they name no category.
/// Other non-blank lines are kept verbatim under the current category, or
/// dropped when no category has been selected yet.
pub fn parse_body(body: &str) -> CategorizedEntries {
    let mut entries = CategorizedEntries::new();
    let mut current: Option<ChangelogCategory> = None;

    for line in body.split('\n') {
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with('#')
            && let Some((_, heading)) = line.split_once(' ')
        {
            if let Ok(category) = heading.parse::<ChangelogCategory>() {
                current = Some(category);
            }
            continue;
        }

        if let Some(category) = current {
            entries.push(category, line);
        }
    }

    entries
}
