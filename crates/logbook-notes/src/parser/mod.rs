//! Release notes parsing

mod heading;

pub use heading::HeadingParser;

use crate::types::ReleaseChanges;

/// Trait for release notes parsers
pub trait NotesParser: Send + Sync {
    /// Parse one release body into categorized changes
    fn parse(&self, body: &str) -> ReleaseChanges;

    /// Recognized category labels, in output order
    fn categories(&self) -> &[String];
}
