//! Shared release types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// A single tagged release as returned by a release source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Tag name, kept verbatim (e.g. "v1.2.3")
    pub version: String,
    /// Free-text release notes
    pub body: Option<String>,
    /// Publication timestamp, when the source provides one
    pub published_at: Option<DateTime<Utc>>,
}

impl ReleaseRecord {
    /// Create a new release record
    pub fn new(version: impl Into<String>, body: Option<String>) -> Self {
        Self {
            version: version.into(),
            body,
            published_at: None,
        }
    }

    /// Set the publication timestamp
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Body text, or an empty string when absent
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// An `owner/repo` pair identifying a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    /// Create a repository identifier from its parts
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `owner/repo`, `https://host/owner/repo[.git]` or
    /// `git@host:owner/repo.git`.
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        let input = input.trim();
        let invalid = || SourceError::InvalidRepository(input.to_string());

        let path = if let Some(rest) = input.strip_prefix("git@") {
            rest.split_once(':').map(|(_, path)| path.to_string())
        } else if input.contains("://") {
            url::Url::parse(input)
                .ok()
                .map(|url| url.path().trim_start_matches('/').to_string())
        } else {
            Some(input.to_string())
        };
        let path = path.ok_or_else(invalid)?;

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let owner = segments.next().ok_or_else(invalid)?;
        let name = segments
            .next()
            .map(|s| s.trim_end_matches(".git"))
            .ok_or_else(invalid)?;

        // Plain `owner/repo` form must not carry extra segments
        if !input.contains("://") && !input.starts_with("git@") && segments.next().is_some() {
            return Err(invalid());
        }

        if !is_valid_segment(owner) || !is_valid_segment(name) {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }

    /// Case-insensitive comparison, matching how hosts treat repository paths
    pub fn matches(&self, owner: &str, name: &str) -> bool {
        self.owner.eq_ignore_ascii_case(owner) && self.name.eq_ignore_ascii_case(name)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryId {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
