//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use logbook_core::config::OutputConfig;

use crate::types::Changelog;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format the whole changelog to a string
    fn format(&self, changelog: &Changelog, config: &OutputConfig) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
