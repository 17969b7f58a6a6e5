//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_API_URL, DEFAULT_CATEGORIES, DEFAULT_LINK_HOST, DEFAULT_MAX_RELEASES,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_ENV,
};

/// Main configuration for Logbook
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Release source configuration
    pub source: SourceConfig,

    /// Release notes parsing configuration
    pub notes: NotesConfig,

    /// Output document configuration
    pub output: OutputConfig,
}

/// Release source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Repository as `owner/repo` or a repository URL
    pub repository: Option<String>,

    /// Base URL of the hosting REST API
    pub api_url: String,

    /// Environment variable holding the API token
    pub token_env: String,

    /// Maximum number of releases considered
    pub max_releases: usize,

    /// Whether prereleases are included
    pub include_prereleases: bool,

    /// Only keep releases whose tag matches this regex
    pub tag_pattern: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            repository: None,
            api_url: DEFAULT_API_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            max_releases: DEFAULT_MAX_RELEASES,
            include_prereleases: true,
            tag_pattern: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Release notes parsing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Recognized `###` heading labels, in output order
    pub categories: Vec<String>,

    /// Hosting domain used for mention and pull request links
    pub link_host: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            link_host: DEFAULT_LINK_HOST.to_string(),
        }
    }
}

/// Output document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Document title
    pub title: String,

    /// Paragraph rendered under the title
    pub header: Option<String>,

    /// Whether to draw a horizontal rule between releases
    pub separator: bool,

    /// Whether to append the publication date to version headings
    pub include_dates: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            title: "Changelog".to_string(),
            header: None,
            separator: true,
            include_dates: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_order() {
        let config = NotesConfig::default();
        assert_eq!(config.categories.first().map(String::as_str), Some("🌟 Highlights"));
        assert_eq!(config.categories.last().map(String::as_str), Some("🔨 Maintenance"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "source:\n  repository: nginx/agent\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source.repository.as_deref(), Some("nginx/agent"));
        assert_eq!(config.source.max_releases, DEFAULT_MAX_RELEASES);
        assert_eq!(config.notes.link_host, "github.com");
        assert_eq!(config.output.file, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_toml_categories_override() {
        let toml_str = "[notes]\ncategories = [\"Fixes\", \"Features\"]\n";
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.notes.categories, vec!["Fixes", "Features"]);
    }
}
