//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::defaults::MAX_RELEASES_LIMIT;
use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_source(config)?;
    validate_notes(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_source(config: &Config) -> Result<()> {
    let source = &config.source;

    if source.max_releases == 0 || source.max_releases > MAX_RELEASES_LIMIT {
        return Err(invalid(
            "source.max_releases",
            format!("must be between 1 and {}", MAX_RELEASES_LIMIT),
        )
        .into());
    }

    if source.api_url.trim().is_empty() {
        return Err(invalid("source.api_url", "api url cannot be empty").into());
    }

    if source.token_env.trim().is_empty() {
        return Err(invalid("source.token_env", "token variable cannot be empty").into());
    }

    if let Some(pattern) = &source.tag_pattern {
        regex::Regex::new(pattern)
            .map_err(|e| invalid("source.tag_pattern", format!("invalid regex: {}", e)))?;
    }

    Ok(())
}

fn validate_notes(config: &Config) -> Result<()> {
    let notes = &config.notes;

    if notes.categories.is_empty() {
        return Err(invalid("notes.categories", "at least one category is required").into());
    }

    let mut seen = HashSet::new();
    for (i, label) in notes.categories.iter().enumerate() {
        if label.trim().is_empty() {
            return Err(invalid(
                &format!("notes.categories[{}]", i),
                "category label cannot be empty",
            )
            .into());
        }
        if !seen.insert(label.as_str()) {
            return Err(invalid(
                &format!("notes.categories[{}]", i),
                format!("duplicate category '{}'", label),
            )
            .into());
        }
    }

    if notes.link_host.trim().is_empty() || notes.link_host.contains('/') {
        return Err(invalid("notes.link_host", "must be a bare domain like github.com").into());
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    if config.output.file.as_os_str().is_empty() {
        return Err(invalid("output.file", "output file cannot be empty").into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_max_releases_bounds() {
        let mut config = Config::default();
        config.source.max_releases = 0;
        assert!(validate_config(&config).is_err());

        config.source.max_releases = 101;
        assert!(validate_config(&config).is_err());

        config.source.max_releases = 100;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_duplicate_category() {
        let mut config = Config::default();
        config.notes.categories = vec!["🚀 Features".to_string(), "🚀 Features".to_string()];
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_blank_category() {
        let mut config = Config::default();
        config.notes.categories = vec!["  ".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_tag_pattern() {
        let mut config = Config::default();
        config.source.tag_pattern = Some(r"^v\d+(\.\d+)*$".to_string());
        assert!(validate_config(&config).is_ok());

        config.source.tag_pattern = Some("(unclosed".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_link_host() {
        let mut config = Config::default();
        config.notes.link_host = "https://github.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_output_file() {
        let mut config = Config::default();
        config.output.file = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }
}
