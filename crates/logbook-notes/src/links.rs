//! Markdown link normalization for change entries
//!
//! Rewrites `@user` mentions and pull request URLs into markdown links.
//! Pull request URLs are rewritten first, then mentions. Anything inside
//! an existing markdown link or code span is left alone, so normalizing
//! twice gives the same result as normalizing once.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use logbook_core::RepositoryId;

/// Regex for `@user` mentions
static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(?P<name>[A-Za-z0-9-]+)").expect("Invalid regex"));

/// Existing markdown links (one level of brackets allowed in the label) and code spans
static PROTECTED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`[^`]*`|\[(?:[^\[\]]|\[[^\[\]]*\])*\]\([^)\s]*\)").expect("Invalid regex")
});

const BOT_SUFFIX: &str = "[bot]";

/// Byte ranges of text that must not be rewritten
fn protected_spans(text: &str) -> Vec<Range<usize>> {
    PROTECTED_REGEX.find_iter(text).map(|m| m.range()).collect()
}

fn is_protected(spans: &[Range<usize>], position: usize) -> bool {
    spans.iter().any(|span| span.contains(&position))
}

/// Rewrites mentions and pull request URLs for one hosting domain
#[derive(Debug, Clone)]
pub struct LinkNormalizer {
    host: String,
    repository: Option<RepositoryId>,
    pull_regex: Regex,
}

impl LinkNormalizer {
    /// Create a normalizer for a hosting domain such as `github.com`
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let pull_regex = Regex::new(&format!(
            r"https://{}/(?P<owner>[A-Za-z0-9_.-]+)/(?P<repo>[A-Za-z0-9_.-]+)/pull/(?P<number>\d+)",
            regex::escape(&host)
        ))
        .expect("Invalid regex");

        Self {
            host,
            repository: None,
            pull_regex,
        }
    }

    /// Set the repository the notes belong to.
    ///
    /// Pull requests of this repository get a `#N` label, others `repo#N`.
    pub fn with_repository(mut self, repository: RepositoryId) -> Self {
        self.repository = Some(repository);
        self
    }

    /// The hosting domain
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Normalize a single entry
    pub fn normalize(&self, entry: &str) -> String {
        let linked = self.link_pull_requests(entry);
        self.link_mentions(&linked)
    }

    fn pull_label(&self, owner: &str, repo: &str, number: &str) -> String {
        match &self.repository {
            Some(context) if !context.matches(owner, repo) => format!("{}#{}", repo, number),
            _ => format!("#{}", number),
        }
    }

    /// Rewrite every bare pull request URL
    fn link_pull_requests(&self, text: &str) -> String {
        let spans = protected_spans(text);
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for caps in self.pull_regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let before = &text[..whole.start()];
            let after = &text[whole.end()..];

            // Already a link label or target
            if is_protected(&spans, whole.start()) || before.ends_with('[') || before.ends_with("](") {
                continue;
            }
            // Deeper URLs such as `/pull/42/files`, or URLs glued to more text
            if after.starts_with(|c: char| {
                c == '/' || c == '#' || c == '[' || c.is_ascii_alphanumeric()
            }) {
                continue;
            }

            let label = self.pull_label(&caps["owner"], &caps["repo"], &caps["number"]);
            output.push_str(&text[last..whole.start()]);
            output.push_str(&format!("[{}]({})", label, whole.as_str()));
            last = whole.end();
        }

        output.push_str(&text[last..]);
        output
    }

    /// Rewrite every bare `@user` mention
    fn link_mentions(&self, text: &str) -> String {
        let spans = protected_spans(text);
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for caps in MENTION_REGEX.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() < last || is_protected(&spans, whole.start()) {
                continue;
            }

            let previous = text[..whole.start()].chars().next_back();
            if previous.is_some_and(|c| {
                c.is_alphanumeric() || matches!(c, '[' | '/' | '.' | '_' | '-' | '@' | '`')
            }) {
                continue;
            }

            let after = &text[whole.end()..];
            // Team mentions (`@org/team`) are not user profiles, `@a@b` runs are not mentions
            if after.starts_with(|c: char| c == '/' || c == '@') {
                continue;
            }

            let name = &caps["name"];
            output.push_str(&text[last..whole.start()]);
            if after.starts_with(BOT_SUFFIX) {
                output.push_str(&format!(
                    "[@{}{}](https://{}/apps/{})",
                    name, BOT_SUFFIX, self.host, name
                ));
                last = whole.end() + BOT_SUFFIX.len();
            } else {
                output.push_str(&format!("[@{}](https://{}/{})", name, self.host, name));
                last = whole.end();
            }
        }

        output.push_str(&text[last..]);
        output
    }
}

impl Default for LinkNormalizer {
    fn default() -> Self {
        Self::new(logbook_core::config::DEFAULT_LINK_HOST)
    }
}
