//! CLI commands

mod generate;
mod init;
mod parse;

pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use parse::ParseCommand;

use logbook_core::config::NotesConfig;
use logbook_core::RepositoryId;
use logbook_notes::{ChangelogBuilder, HeadingParser, LinkNormalizer};

/// Builder whose pull request labels are relative to `repository`
pub(crate) fn builder_for(notes: &NotesConfig, repository: Option<RepositoryId>) -> ChangelogBuilder {
    let mut links = LinkNormalizer::new(notes.link_host.clone());
    if let Some(repository) = repository {
        links = links.with_repository(repository);
    }
    let parser = HeadingParser::new(notes.categories.clone(), links);
    ChangelogBuilder::new(notes).with_parser(parser)
}
