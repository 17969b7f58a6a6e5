//! Markdown changelog formatter

use logbook_core::config::OutputConfig;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::tidy::tidy;
use crate::types::{Changelog, ReleaseEntry};

/// Markdown changelog formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    /// Format the categorized changes of one release
    pub fn format_release(&self, release: &ReleaseEntry, config: &OutputConfig) -> String {
        let mut output = String::new();

        output.push_str(&format!("## {}", release.version));
        if config.include_dates {
            if let Some(date) = release.published_at {
                output.push_str(&format!(" ({})", date.format("%Y-%m-%d")));
            }
        }
        output.push_str("\n\n");

        for section in release.changes.sections() {
            output.push_str(&format!("### {}\n\n", section.category));
            for entry in &section.entries {
                output.push_str(&format!("- {}\n", entry));
            }
            output.push('\n');
        }

        output
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, changelog, config), fields(release_count = changelog.len()))]
    fn format(&self, changelog: &Changelog, config: &OutputConfig) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", config.title));

        if let Some(header) = &config.header {
            output.push_str(header.trim());
            output.push_str("\n\n");
        }

        for release in changelog {
            output.push_str(&self.format_release(release, config));
            if config.separator {
                output.push_str("---\n\n");
            }
        }

        let output = tidy(&output);
        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
