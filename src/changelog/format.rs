//! Changelog categories and the per-category entry table.

use serde::{Deserialize, Serialize};

/// The closed set of changelog categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangelogCategory {
    Added,
    Changes,
    Deprecated,
    Removed,
    Fixed,
    Security,
    Other,
}

impl ChangelogCategory {
    /// Every category, in the order sections are rendered.
    pub const ALL: [ChangelogCategory; 7] = [
        Self::Added,
        Self::Changes,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
        Self::Other,
    ];

    /// Get the display name for the category.
    ///
    /// This is also the exact heading text recognized in PR bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changes => "Changes",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }

    /// Position of the category in [`ChangelogCategory::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ChangelogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangelogCategory {
    type Err = String;

    /// Matching is exact and case-sensitive: `"Fixed"` is a category, `"fixed"` is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Changelog lines grouped by category.
///
/// Backed by one vector per category so the category set can never grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedEntries {
    sections: [Vec<String>; 7],
}

impl CategorizedEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the end of a category.
    pub fn push(&mut self, category: ChangelogCategory, line: impl Into<String>) {
        self.sections[category.index()].push(line.into());
    }

    pub fn get(&self, category: ChangelogCategory) -> &[String] {
        &self.sections[category.index()]
    }

    /// Append all of `other`'s lines after this table's lines, category by category.
    pub fn extend(&mut self, other: CategorizedEntries) {
        for (mine, theirs) in self.sections.iter_mut().zip(other.sections) {
            mine.extend(theirs);
        }
    }

    /// True when no category holds a line.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Vec::is_empty)
    }

    /// Total number of lines across all categories.
    pub fn len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Non-empty categories with their lines, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ChangelogCategory, &[String])> {
        ChangelogCategory::ALL
            .into_iter()
            .zip(self.sections.iter())
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(category, lines)| (category, lines.as_slice()))
    }
}
