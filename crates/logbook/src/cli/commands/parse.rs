//! Parse command

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use logbook_core::{ReleaseRecord, RepositoryId};
use logbook_notes::tidy::tidy;
use logbook_notes::MarkdownFormatter;

use super::builder_for;
use crate::cli::{output, Cli, OutputFormat};

/// Parse a local release notes file and print its changes
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Release notes file, or `-` to read stdin
    pub file: PathBuf,

    /// Repository the notes belong to, for pull request labels
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Version heading to print
    #[arg(long = "as-version", value_name = "VERSION", default_value = "Unreleased")]
    pub as_version: String,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = %self.file.display(), "executing parse command");
        let cwd = std::env::current_dir()?;
        let config = cli.load_config(&cwd)?;

        let body = if self.file.as_os_str() == "-" {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        } else {
            std::fs::read_to_string(&self.file)?
        };

        let repository = self
            .repo
            .as_deref()
            .or(config.source.repository.as_deref())
            .map(RepositoryId::parse)
            .transpose()?;

        let builder = builder_for(&config.notes, repository);
        let record = ReleaseRecord::new(self.as_version.clone(), Some(body));
        let release = builder.build_release(&record);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&release)?);
            }
            OutputFormat::Text => {
                if release.changes.is_empty() && !cli.quiet {
                    output::warning("No recognized category headings found.");
                }
                let rendered = MarkdownFormatter::new().format_release(&release, &config.output);
                print!("{}", tidy(&rendered));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(args)?;
        match &cli.command {
            crate::cli::Commands::Parse(cmd) => cmd.execute(&cli),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_parse_local_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("logbook.yaml");
        std::fs::write(&config, "source:\n  repository: org/repo\n").unwrap();
        let notes = temp.path().join("notes.md");
        std::fs::write(&notes, "### 🚀 Features\n* Add widget support\n").unwrap();

        let cli = Cli::try_parse_from([
            "logbook",
            "-q",
            "--config",
            config.to_str().unwrap(),
            "parse",
            notes.to_str().unwrap(),
            "--as-version",
            "v1.0.0",
        ])
        .unwrap();
        match &cli.command {
            crate::cli::Commands::Parse(cmd) => {
                assert_eq!(cmd.as_version, "v1.0.0");
                cmd.execute(&cli).unwrap();
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("logbook.yaml");
        std::fs::write(&config, "output:\n  title: Changelog\n").unwrap();
        let missing = temp.path().join("missing.md");

        let result = run(&[
            "logbook",
            "--config",
            config.to_str().unwrap(),
            "parse",
            missing.to_str().unwrap(),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_repository() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("logbook.yaml");
        std::fs::write(&config, "output:\n  title: Changelog\n").unwrap();
        let notes = temp.path().join("notes.md");
        std::fs::write(&notes, "### 🚀 Features\n* a\n").unwrap();

        let result = run(&[
            "logbook",
            "--config",
            config.to_str().unwrap(),
            "parse",
            notes.to_str().unwrap(),
            "--repo",
            "a/b/c",
        ]);
        assert!(result.is_err());
    }
}
