//! Logbook Notes - Release notes parsing and changelog rendering
//!
//! This crate turns free-text release bodies into categorized change
//! entries and renders them into a single changelog document.

pub mod formatter;
pub mod generator;
pub mod links;
pub mod parser;
pub mod tidy;
pub mod types;
pub mod writer;

pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogBuilder;
pub use links::LinkNormalizer;
pub use parser::{HeadingParser, NotesParser};
pub use types::{ChangeSection, Changelog, ReleaseChanges, ReleaseEntry};
pub use writer::write_changelog;
