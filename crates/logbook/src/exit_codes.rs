//! Exit codes for the CLI

use logbook_core::{ConfigError, LogbookError, SourceError};

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Release source error (network, credentials, API)
pub const SOURCE_ERROR: i32 = 3;

/// Output error
pub const RENDER_ERROR: i32 = 4;

/// Map an error to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    if err.downcast_ref::<SourceError>().is_some() {
        return SOURCE_ERROR;
    }
    match err.downcast_ref::<LogbookError>() {
        Some(LogbookError::Config(_)) => CONFIG_ERROR,
        Some(LogbookError::Source(_)) => SOURCE_ERROR,
        Some(LogbookError::Render(_)) => RENDER_ERROR,
        _ if err.downcast_ref::<logbook_core::RenderError>().is_some() => RENDER_ERROR,
        _ => ERROR,
    }
}
