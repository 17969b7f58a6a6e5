//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "logbook.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "logbook.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".logbook.yaml";

/// Default REST API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default hosting domain for generated links
pub const DEFAULT_LINK_HOST: &str = "github.com";

/// Default environment variable for the API token
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default cap on releases considered
pub const DEFAULT_MAX_RELEASES: usize = 30;

/// Largest page the releases endpoint serves
pub const MAX_RELEASES_LIMIT: usize = 100;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default category headings, in output order
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "🌟 Highlights",
    "🚀 Features",
    "🐛 Bug Fixes",
    "📝 Documentation",
    "⬆️ Dependencies",
    "🔨 Maintenance",
];

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".logbook.toml",
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Logbook Configuration

source:
  # repository: owner/repo
  api_url: https://api.github.com
  token_env: GITHUB_TOKEN
  max_releases: 30
  include_prereleases: true
  # tag_pattern: '^v\d+(\.\d+)*$'
  timeout_secs: 30

notes:
  categories:
    - "🌟 Highlights"
    - "🚀 Features"
    - "🐛 Bug Fixes"
    - "📝 Documentation"
    - "⬆️ Dependencies"
    - "🔨 Maintenance"
  link_host: github.com

output:
  file: CHANGELOG.md
  title: Changelog
  separator: true
  include_dates: false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let defaults = Config::default();
        assert_eq!(config.notes.categories, defaults.notes.categories);
        assert_eq!(config.source.max_releases, defaults.source.max_releases);
        assert_eq!(config.output.file, defaults.output.file);
    }

    #[test]
    fn test_generated_toml_round_trips() {
        let config: Config = toml::from_str(&default_config_toml()).unwrap();
        assert_eq!(config.notes.link_host, DEFAULT_LINK_HOST);
    }
}
