//! Changelog file output

use std::path::Path;

use logbook_core::RenderError;
use tracing::{info, instrument};

use crate::tidy::tidy_file;

/// Write the rendered changelog, replacing any existing file, then tidy it
#[instrument(skip(path, content), fields(path = %path.display(), content_len = content.len()))]
pub fn write_changelog(path: &Path, content: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path, content).map_err(|e| RenderError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    tidy_file(path)?;
    info!(path = %path.display(), "changelog written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docs").join("CHANGELOG.md");

        write_changelog(&path, "# Changelog\n\n## v1.0.0\n\n\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Changelog\n\n## v1.0.0\n"
        );
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "old content\n").unwrap();

        write_changelog(&path, "# Changelog\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Changelog\n");
    }
}
