//! GitHub Releases API client
//!
//! ## Authentication
//!
//! Uses a bearer token, passed explicitly or read from the configured
//! environment variable (`GITHUB_TOKEN` by default).

use std::time::Duration;

use chrono::{DateTime, Utc};
use logbook_core::config::{SourceConfig, MAX_RELEASES_LIMIT};
use logbook_core::{ReleaseRecord, RepositoryId, SourceError};
use regex::Regex;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::traits::ReleaseSource;
use crate::Result;

const USER_AGENT: &str = concat!("logbook/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// GitHub API response for a single release
#[derive(Debug, Deserialize)]
struct GitHubRelease {
    tag_name: String,
    body: Option<String>,
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    prerelease: bool,
    #[serde(default)]
    draft: bool,
}

impl From<GitHubRelease> for ReleaseRecord {
    fn from(release: GitHubRelease) -> Self {
        Self {
            version: release.tag_name,
            body: release.body,
            published_at: release.published_at,
        }
    }
}

/// GitHub API error response
#[derive(Debug, Deserialize)]
struct GitHubError {
    message: String,
}

/// Filters applied to fetched releases
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Maximum number of releases returned
    pub max_releases: usize,
    /// Whether prereleases are kept
    pub include_prereleases: bool,
    /// Only keep tags matching this pattern
    pub tag_pattern: Option<Regex>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_releases: logbook_core::config::DEFAULT_MAX_RELEASES,
            include_prereleases: true,
            tag_pattern: None,
        }
    }
}

impl FetchOptions {
    fn keeps(&self, release: &GitHubRelease) -> bool {
        if release.draft {
            debug!(tag = %release.tag_name, "skipping draft release");
            return false;
        }
        if release.prerelease && !self.include_prereleases {
            debug!(tag = %release.tag_name, "skipping prerelease");
            return false;
        }
        if let Some(pattern) = &self.tag_pattern {
            if !pattern.is_match(&release.tag_name) {
                debug!(tag = %release.tag_name, "skipping tag not matching pattern");
                return false;
            }
        }
        true
    }
}

/// Release source backed by the GitHub REST API
pub struct GitHubSource {
    client: Client,
    api_url: String,
    repository: RepositoryId,
    token: String,
    options: FetchOptions,
}

impl GitHubSource {
    /// Create a new GitHub release source
    pub fn new(repository: RepositoryId, token: impl Into<String>, options: FetchOptions) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SourceError::MissingToken(
                logbook_core::config::DEFAULT_TOKEN_ENV.to_string(),
            ));
        }

        Ok(Self {
            client: build_client(Duration::from_secs(logbook_core::config::DEFAULT_TIMEOUT_SECS))?,
            api_url: logbook_core::config::DEFAULT_API_URL.to_string(),
            repository,
            token,
            options,
        })
    }

    /// Create a source from configuration.
    ///
    /// `token` takes precedence over the environment variable named by
    /// `config.token_env`.
    pub fn from_config(config: &SourceConfig, repository: &str, token: Option<String>) -> Result<Self> {
        let repository = RepositoryId::parse(repository)?;

        let token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| load_token(&config.token_env))
            .ok_or_else(|| SourceError::MissingToken(config.token_env.clone()))?;

        let tag_pattern = config
            .tag_pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| SourceError::InvalidFilter(e.to_string()))?;

        let options = FetchOptions {
            max_releases: config.max_releases.clamp(1, MAX_RELEASES_LIMIT),
            include_prereleases: config.include_prereleases,
            tag_pattern,
        };

        Ok(Self {
            client: build_client(Duration::from_secs(config.timeout_secs))?,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repository,
            token,
            options,
        })
    }

    /// Override the API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The repository releases are fetched for
    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url, self.repository.owner, self.repository.name, path
        )
    }

    /// URL of a release by tag, with the tag encoded as one path segment
    fn tag_url(&self, tag: &str) -> Result<Url> {
        let base = self.repo_url("releases/tags");
        let mut url = Url::parse(&base).map_err(|e| SourceError::Http(format!("{}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Http(format!("{}: not a base URL", base)))?
            .push(tag);
        Ok(url)
    }

    async fn get(&self, url: &str) -> Result<Response> {
        debug!(url, "sending request");
        self.client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))
    }

    /// Map non-success responses to errors
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let rate_limited = status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN
                && response
                    .headers()
                    .get("x-ratelimit-remaining")
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.trim() == "0"));
        if rate_limited {
            warn!(status = status.as_u16(), "rate limited by GitHub");
            return Err(SourceError::RateLimited);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GitHubError>(&text)
            .map(|e| e.message)
            .unwrap_or(text);

        Err(SourceError::ApiError {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T> {
        let text = response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| SourceError::InvalidResponse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubSource {
    fn name(&self) -> &str {
        "GitHub"
    }

    #[instrument(skip(self), fields(repository = %self.repository))]
    async fn releases(&self) -> Result<Vec<ReleaseRecord>> {
        let start = std::time::Instant::now();
        // Drafts and filtered tags must not count against the cap, so fetch a full page
        let url = format!("{}?per_page={}", self.repo_url("releases"), MAX_RELEASES_LIMIT);

        let response = Self::check_response(self.get(&url).await?).await?;
        let fetched: Vec<GitHubRelease> = Self::decode(response).await?;
        let fetched_count = fetched.len();

        let records: Vec<ReleaseRecord> = fetched
            .into_iter()
            .filter(|r| self.options.keeps(r))
            .take(self.options.max_releases)
            .map(ReleaseRecord::from)
            .collect();

        info!(
            fetched = fetched_count,
            kept = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "fetched releases"
        );
        Ok(records)
    }

    #[instrument(skip(self), fields(repository = %self.repository))]
    async fn release(&self, tag: &str) -> Result<ReleaseRecord> {
        let url = self.tag_url(tag)?;
        let response = self.get(url.as_str()).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::ReleaseNotFound(tag.to_string()));
        }

        let response = Self::check_response(response).await?;
        let release: GitHubRelease = Self::decode(response).await?;
        info!(tag = %release.tag_name, "fetched release");
        Ok(release.into())
    }
}

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| SourceError::Http(e.to_string()))
}

/// Load token from the named environment variable
fn load_token(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(token) if !token.trim().is_empty() => {
            debug!(var, "loaded token from environment");
            Some(token)
        }
        _ => None,
    }
}
