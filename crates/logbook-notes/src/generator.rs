//! Changelog assembly

use logbook_core::config::NotesConfig;
use logbook_core::ReleaseRecord;
use tracing::{debug, info, instrument};

use crate::parser::{HeadingParser, NotesParser};
use crate::types::{Changelog, ReleaseChanges, ReleaseEntry};

/// Builds a changelog from fetched release records
pub struct ChangelogBuilder {
    parser: Box<dyn NotesParser>,
}

impl ChangelogBuilder {
    /// Create a builder with the default heading parser
    pub fn new(config: &NotesConfig) -> Self {
        Self {
            parser: Box::new(HeadingParser::from_config(config)),
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: NotesParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Parse a single release
    pub fn build_release(&self, record: &ReleaseRecord) -> ReleaseEntry {
        let body = record.body_text();
        let changes = if body.trim().is_empty() {
            debug!(version = %record.version, "release has no body");
            ReleaseChanges::default()
        } else {
            self.parser.parse(body)
        };

        ReleaseEntry::new(record.version.clone(), changes).with_published_at(record.published_at)
    }

    /// Parse every release, keeping fetch order
    #[instrument(skip(self, records), fields(release_count = records.len()))]
    pub fn build(&self, records: &[ReleaseRecord]) -> Changelog {
        info!(release_count = records.len(), "building changelog");

        let releases: Vec<ReleaseEntry> = records.iter().map(|r| self.build_release(r)).collect();

        debug!(
            with_changes = releases.iter().filter(|r| !r.changes.is_empty()).count(),
            "changelog built"
        );
        Changelog::new(releases)
    }
}

impl Default for ChangelogBuilder {
    fn default() -> Self {
        Self::new(&NotesConfig::default())
    }
}
