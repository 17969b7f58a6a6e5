//! Generate command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use logbook_core::config::validate_config;
use logbook_github::{GitHubSource, ReleaseSource};
use logbook_notes::{write_changelog, ChangelogFormatter, MarkdownFormatter};

use super::builder_for;
use crate::cli::{output, Cli, OutputFormat};

/// Fetch releases and write the aggregated changelog
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Repository as owner/repo or URL (defaults to source.repository)
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Only include the release with this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Maximum number of releases to consider
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// API token (defaults to the variable named by source.token_env)
    #[arg(long)]
    pub token: Option<String>,

    /// Output file (defaults to output.file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the changelog instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(repo = ?self.repo, tag = ?self.tag, limit = ?self.limit, "executing generate command");
        let cwd = std::env::current_dir()?;
        let mut config = cli.load_config(&cwd)?;

        if let Some(limit) = self.limit {
            config.source.max_releases = limit;
        }
        validate_config(&config)?;

        let repository = self
            .repo
            .clone()
            .or_else(|| config.source.repository.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("No repository given: pass --repo or set source.repository")
            })?;

        let source = GitHubSource::from_config(&config.source, &repository, self.token.clone())?;

        if !cli.quiet && cli.format == OutputFormat::Text {
            output::info(&format!(
                "Fetching releases for {} from {}",
                source.repository(),
                source.name()
            ));
        }

        // Single fetch, driven to completion on this thread
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let records = runtime.block_on(async {
            match &self.tag {
                Some(tag) => source.release(tag).await.map(|r| vec![r]),
                None => source.releases().await,
            }
        })?;

        let builder = builder_for(&config.notes, Some(source.repository().clone()));
        let changelog = builder.build(&records);

        if changelog.is_empty() {
            if !cli.quiet {
                output::warning("No releases found; nothing written.");
            }
            return Ok(());
        }

        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&changelog)?);
            return Ok(());
        }

        let formatter = MarkdownFormatter::new();
        let rendered = formatter.format(&changelog, &config.output);

        if self.stdout {
            print!("{}", rendered);
            return Ok(());
        }

        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(&config.output.file));
        write_changelog(&output_path, &rendered)?;

        if !cli.quiet {
            output::success(&format!(
                "Changelog written to {}",
                output::path_style().apply_to(output_path.display())
            ));
            if let Some(latest) = changelog.releases().first() {
                println!(
                    "{}",
                    output::key_value("latest", &output::version_style().apply_to(&latest.version).to_string())
                );
            }
            println!(
                "{}",
                output::key_value("releases", &changelog.len().to_string())
            );
        }

        Ok(())
    }
}
