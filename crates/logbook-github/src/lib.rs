//! Logbook GitHub - Release source backed by the GitHub REST API
//!
//! Fetches release records (tag name and markdown body) for one
//! repository, applying draft, prerelease, tag and count filters before
//! anything is parsed.

mod client;
mod traits;

pub use client::{FetchOptions, GitHubSource};
pub use traits::ReleaseSource;

pub use logbook_core::SourceError;

/// Result type alias for release source operations
pub type Result<T> = std::result::Result<T, SourceError>;
