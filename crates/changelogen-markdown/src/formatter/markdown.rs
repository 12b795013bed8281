//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::emoji::{GitmojiNormalizer, ShortcodeNormalizer};
use crate::types::ChangelogEntry;

/// Heading of the breaking changes section
pub const BREAKING_CHANGES_HEADING: &str = "#### \u{26a0}\u{fe0f}  Breaking Changes";

/// Heading of the contributors section
pub const CONTRIBUTORS_HEADING: &str = "### \u{2764}\u{fe0f}  Contributors";

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    normalizer: Box<dyn ShortcodeNormalizer>,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter using gitmoji shortcodes
    pub fn new() -> Self {
        Self {
            normalizer: Box::new(GitmojiNormalizer::new()),
        }
    }

    /// Use a custom shortcode normalizer
    pub fn with_normalizer<N: ShortcodeNormalizer + 'static>(mut self, normalizer: N) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(
        skip(self, entry),
        fields(version = %entry.version, section_count = entry.sections.len())
    )]
    fn format(&self, entry: &ChangelogEntry) -> String {
        let mut markdown: Vec<String> =
            vec![String::new(), format!("## {}", entry.title), String::new()];

        for section in &entry.sections {
            markdown.push(String::new());
            markdown.push(format!("### {}", section.title));
            markdown.push(String::new());
            markdown.extend(section.lines.iter().cloned());
        }

        if !entry.breaking_changes.is_empty() {
            markdown.push(String::new());
            markdown.push(BREAKING_CHANGES_HEADING.to_string());
            markdown.push(String::new());
            markdown.extend(entry.breaking_changes.iter().cloned());
        }

        if !entry.contributors.is_empty() {
            markdown.push(String::new());
            markdown.push(CONTRIBUTORS_HEADING.to_string());
            markdown.push(String::new());
            markdown.extend(entry.contributors.iter().map(|name| format!("- {}", name)));
        }

        let joined = markdown.join("\n");
        let output = self.normalizer.normalize(joined.trim(), true);

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}
