//! `###` heading parser
//!
//! Collects the bullet list under each level-3 heading whose text matches
//! a configured category label exactly:
//!
//! ```text
//! ### 🚀 Features
//! * Add widget support by @alice in https://github.com/org/repo/pull/12
//! ```
//!
//! A section runs until the first line that is neither a bullet nor a
//! blank line before the first bullet. Repeated headings append to the
//! same category.

use logbook_core::config::NotesConfig;
use tracing::{debug, instrument, trace};

use super::NotesParser;
use crate::links::LinkNormalizer;
use crate::types::{ChangeSection, ReleaseChanges};

/// Parser for `### <category>` sections with `*` bullets
#[derive(Debug, Clone)]
pub struct HeadingParser {
    categories: Vec<String>,
    links: LinkNormalizer,
}

impl HeadingParser {
    /// Create a parser for the given category labels
    pub fn new(categories: Vec<String>, links: LinkNormalizer) -> Self {
        Self { categories, links }
    }

    /// Create a parser from notes configuration
    pub fn from_config(config: &NotesConfig) -> Self {
        Self::new(
            config.categories.clone(),
            LinkNormalizer::new(config.link_host.clone()),
        )
    }

    /// Replace the link normalizer
    pub fn with_links(mut self, links: LinkNormalizer) -> Self {
        self.links = links;
        self
    }

    fn category_index(&self, label: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == label)
    }
}

impl Default for HeadingParser {
    fn default() -> Self {
        Self::from_config(&NotesConfig::default())
    }
}

/// Label of a level-3 heading line
fn heading_label(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("###")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

/// Text of a `*` bullet line with the marker stripped.
///
/// `*text` counts as a bullet; `**bold**` prose does not.
fn bullet_text(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('*')?;
    if rest.starts_with('*') {
        return None;
    }
    Some(rest.trim())
}

impl NotesParser for HeadingParser {
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    fn parse(&self, body: &str) -> ReleaseChanges {
        let mut collected: Vec<Vec<String>> = vec![Vec::new(); self.categories.len()];
        let mut current: Option<usize> = None;
        let mut seen_bullet = false;

        for line in body.lines() {
            if let Some(label) = heading_label(line) {
                current = self.category_index(label);
                seen_bullet = false;
                if current.is_none() {
                    debug!(label, "ignoring unrecognized heading");
                }
                continue;
            }

            let Some(index) = current else { continue };

            if let Some(text) = bullet_text(line) {
                seen_bullet = true;
                if !text.is_empty() {
                    trace!(category = %self.categories[index], text, "collected entry");
                    collected[index].push(self.links.normalize(text));
                }
            } else if !(line.trim().is_empty() && !seen_bullet) {
                current = None;
            }
        }

        let changes = ReleaseChanges::from_sections(self.categories.iter().zip(collected).map(
            |(category, entries)| ChangeSection {
                category: category.clone(),
                entries,
            },
        ));

        debug!(
            sections = changes.sections().len(),
            entries = changes.entry_count(),
            "release notes parsed"
        );
        changes
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parser() -> HeadingParser {
        HeadingParser::default()
    }

    #[test]
    fn test_parse_two_categories() {
        let body = "### 🚀 Features\n* Add widget support\n### 🐛 Bug Fixes\n* Fix crash on startup";
        let changes = parser().parse(body);

        assert_eq!(
            changes.categories().collect::<Vec<_>>(),
            vec!["🚀 Features", "🐛 Bug Fixes"]
        );
        assert_eq!(changes.get("🚀 Features").unwrap(), ["Add widget support"]);
        assert_eq!(changes.get("🐛 Bug Fixes").unwrap(), ["Fix crash on startup"]);
    }

    #[test]
    fn test_output_follows_configured_order() {
        let body = "### 🔨 Maintenance\n* Tidy CI\n\n### 🚀 Features\n* New flag\n";
        let changes = parser().parse(body);

        assert_eq!(
            changes.categories().collect::<Vec<_>>(),
            vec!["🚀 Features", "🔨 Maintenance"]
        );
    }

    #[test]
    fn test_unrecognized_heading_ignored() {
        let changes = parser().parse("### Notes\n* something");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_heading_match_is_exact() {
        let changes = parser().parse("### Features\n* no emoji\n### 🚀 features\n* lowercase");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_empty_body() {
        assert!(parser().parse("").is_empty());
        assert!(parser().parse("\n\n").is_empty());
    }

    #[test]
    fn test_bullets_without_heading_ignored() {
        assert!(parser().parse("* orphan\n* bullets").is_empty());
    }

    #[test]
    fn test_section_ends_at_non_bullet_line() {
        let body = "### 🚀 Features\n* first\n* second\nSome prose\n* not collected";
        let changes = parser().parse(body);
        assert_eq!(changes.get("🚀 Features").unwrap(), ["first", "second"]);
    }

    #[test]
    fn test_blank_line_after_heading_tolerated() {
        let body = "### 🚀 Features\n\n* first\n\n* after gap";
        let changes = parser().parse(body);
        assert_eq!(changes.get("🚀 Features").unwrap(), ["first"]);
    }

    #[test]
    fn test_repeated_heading_appends() {
        let body = "### 🚀 Features\n* one\n### 🐛 Bug Fixes\n* fix\n### 🚀 Features\n* two";
        let changes = parser().parse(body);
        assert_eq!(changes.get("🚀 Features").unwrap(), ["one", "two"]);
    }

    #[test]
    fn test_marker_and_whitespace_stripped() {
        let body = "### 📝 Documentation\r\n*   Update README  \r\n  *\tFix typo\r\n*\r\n";
        let changes = parser().parse(body);
        assert_eq!(
            changes.get("📝 Documentation").unwrap(),
            ["Update README", "Fix typo"]
        );
    }

    #[test]
    fn test_highlights_heading() {
        let changes = parser().parse("### 🌟 Highlights\n* Big thing\n### 🚀 Features\n* Small thing");
        assert_eq!(
            changes.categories().collect::<Vec<_>>(),
            vec!["🌟 Highlights", "🚀 Features"]
        );
        assert_eq!(changes.get("🌟 Highlights").unwrap(), ["Big thing"]);
    }

    #[test]
    fn test_marker_without_space_is_a_bullet() {
        let body = "### 🚀 Features\n*Add thing\n* Another";
        let changes = parser().parse(body);
        assert_eq!(changes.get("🚀 Features").unwrap(), ["Add thing", "Another"]);
    }

    #[test]
    fn test_bold_line_is_not_a_bullet() {
        let body = "### 🚀 Features\n* one\n**Full Changelog**: v1...v2";
        let changes = parser().parse(body);
        assert_eq!(changes.get("🚀 Features").unwrap(), ["one"]);
    }

    #[test]
    fn test_deeper_heading_not_recognized() {
        let changes = parser().parse("#### 🚀 Features\n* nested");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_entries_are_normalized() {
        let body = "## What's Changed\n### ⬆️ Dependencies\n* Bump regex by @dependabot[bot] in https://github.com/org/repo/pull/5";
        let changes = parser().parse(body);
        assert_eq!(
            changes.get("⬆️ Dependencies").unwrap(),
            ["Bump regex by [@dependabot[bot]](https://github.com/apps/dependabot) in [#5](https://github.com/org/repo/pull/5)"]
        );
    }

    #[test]
    fn test_custom_categories() {
        let parser = HeadingParser::new(
            vec!["Fixes".to_string(), "Features".to_string()],
            LinkNormalizer::default(),
        );
        let changes = parser.parse("### Features\n* a\n### Fixes\n* b");
        assert_eq!(changes.categories().collect::<Vec<_>>(), vec!["Fixes", "Features"]);
    }

    fn category_strategy() -> impl Strategy<Value = Vec<(usize, Vec<String>)>> {
        let labels = NotesConfig::default().categories.len();
        prop::collection::vec(
            (0..labels, prop::collection::vec("[a-z]{1,10}( [a-z]{1,10})?", 0..4)),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn prop_sections_follow_config_order_and_are_non_empty(blocks in category_strategy()) {
            let parser = parser();
            let labels = parser.categories().to_vec();

            let mut body = String::new();
            for (index, entries) in &blocks {
                body.push_str(&format!("### {}\n", labels[*index]));
                for entry in entries {
                    body.push_str(&format!("* {}\n", entry));
                }
                body.push('\n');
            }

            let changes = parser.parse(&body);

            let positions: Vec<usize> = changes
                .categories()
                .map(|c| labels.iter().position(|l| l == c).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(changes.sections().iter().all(|s| !s.entries.is_empty()));

            let expected: usize = blocks.iter().map(|(_, e)| e.len()).sum();
            prop_assert_eq!(changes.entry_count(), expected);
        }
    }
}
