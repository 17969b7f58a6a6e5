//! Whitespace cleanup for rendered changelogs

use std::path::Path;

use logbook_core::RenderError;
use tracing::{debug, instrument};

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Collapse every run of blank lines into a single empty line
pub fn collapse_blank_lines(content: &str) -> String {
    let mut output = String::with_capacity(content.len());
    let mut previous_blank = false;

    for line in content.lines() {
        if is_blank(line) {
            if !previous_blank {
                output.push('\n');
            }
            previous_blank = true;
        } else {
            output.push_str(line);
            output.push('\n');
            previous_blank = false;
        }
    }

    output
}

/// Drop trailing blank lines and a dangling `---` rule, ending with one newline
pub fn trim_trailing(content: &str) -> String {
    let mut lines: Vec<&str> = content.lines().collect();

    while lines.last().is_some_and(|l| is_blank(l)) {
        lines.pop();
    }
    if lines.last().is_some_and(|l| l.trim() == "---") {
        lines.pop();
        while lines.last().is_some_and(|l| is_blank(l)) {
            lines.pop();
        }
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Full cleanup pass
pub fn tidy(content: &str) -> String {
    trim_trailing(&collapse_blank_lines(content))
}

/// Clean up a file in place
#[instrument(skip(path), fields(path = %path.display()))]
pub fn tidy_file(path: &Path) -> Result<(), RenderError> {
    let content = std::fs::read_to_string(path)?;
    let cleaned = tidy(&content);
    if cleaned != content {
        std::fs::write(path, &cleaned)?;
        debug!(
            before = content.len(),
            after = cleaned.len(),
            "tidied changelog file"
        );
    }
    Ok(())
}
