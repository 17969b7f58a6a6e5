//! Logbook Core - Core library for changelog aggregation
//!
//! This crate provides the shared release types, error handling, and
//! configuration used by the Logbook crates.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ConfigError, LogbookError, RenderError, Result, SourceError};
pub use types::{ReleaseRecord, RepositoryId};
