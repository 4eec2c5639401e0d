//! Changelog entry parsing and document writing.

pub mod format;
pub mod parser;
pub mod writer;

pub use format::{CategorizedEntries, ChangelogCategory};
pub use parser::parse_body;
pub use writer::{
    RELEASED_MARKER, format_pulls_list, merge_entries, read_changelog, render_entries,
    splice_release, today, write_changelog,
};
