//! Changelog types

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Entries collected under one category heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSection {
    /// Category label, exactly as configured
    pub category: String,
    /// Normalized change entries, in document order
    pub entries: Vec<String>,
}

impl ChangeSection {
    /// Create a new section
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            entries: Vec::new(),
        }
    }

    /// Add an entry to the section
    pub fn add_entry(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Categorized changes of one release.
///
/// Sections iterate in configured category order and never include an
/// empty section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseChanges {
    sections: Vec<ChangeSection>,
}

impl ReleaseChanges {
    /// Build from sections already in category order, dropping empty ones
    pub fn from_sections(sections: impl IntoIterator<Item = ChangeSection>) -> Self {
        Self {
            sections: sections.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Sections in category order
    pub fn sections(&self) -> &[ChangeSection] {
        &self.sections
    }

    /// Entries for a category, if it has any
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.entries.as_slice())
    }

    /// Iterate category labels in order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.category.as_str())
    }

    /// Total number of entries across all sections
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Check if no category has entries
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for ReleaseChanges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.category, &section.entries)?;
        }
        map.end()
    }
}

/// Changes for a single version
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReleaseEntry {
    /// Version string, verbatim from the release tag
    pub version: String,
    /// Publication timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Categorized changes
    pub changes: ReleaseChanges,
}

impl ReleaseEntry {
    /// Create a new entry
    pub fn new(version: impl Into<String>, changes: ReleaseChanges) -> Self {
        Self {
            version: version.into(),
            published_at: None,
            changes,
        }
    }

    /// Set the publication timestamp
    pub fn with_published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }
}

/// The aggregated changelog, in fetch order
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Changelog {
    releases: Vec<ReleaseEntry>,
}

impl Changelog {
    /// Create a changelog from release entries
    pub fn new(releases: Vec<ReleaseEntry>) -> Self {
        Self { releases }
    }

    /// Release entries in order
    pub fn releases(&self) -> &[ReleaseEntry] {
        &self.releases
    }

    /// Number of releases
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Check if there are no releases
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Iterate release entries
    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseEntry> {
        self.releases.iter()
    }
}

impl<'a> IntoIterator for &'a Changelog {
    type Item = &'a ReleaseEntry;
    type IntoIter = std::slice::Iter<'a, ReleaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.releases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(category: &str, entries: &[&str]) -> ChangeSection {
        ChangeSection {
            category: category.to_string(),
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_sections_drops_empty() {
        let changes = ReleaseChanges::from_sections(vec![
            section("🚀 Features", &["a"]),
            section("🐛 Bug Fixes", &[]),
            section("🔨 Maintenance", &["b", "c"]),
        ]);

        assert_eq!(
            changes.categories().collect::<Vec<_>>(),
            vec!["🚀 Features", "🔨 Maintenance"]
        );
        assert!(changes.get("🐛 Bug Fixes").is_none());
        assert_eq!(changes.entry_count(), 3);
    }

    #[test]
    fn test_serialize_preserves_category_order() {
        let changes = ReleaseChanges::from_sections(vec![
            section("🐛 Bug Fixes", &["fix"]),
            section("🚀 Features", &["feat"]),
        ]);

        let json = serde_json::to_string(&changes).unwrap();
        assert_eq!(json, r#"{"🐛 Bug Fixes":["fix"],"🚀 Features":["feat"]}"#);
    }

    #[test]
    fn test_changelog_serialization() {
        let changelog = Changelog::new(vec![ReleaseEntry::new("v1.0.0", ReleaseChanges::default())]);
        let json = serde_json::to_string(&changelog).unwrap();
        assert_eq!(json, r#"{"releases":[{"version":"v1.0.0","changes":{}}]}"#);
    }
}
