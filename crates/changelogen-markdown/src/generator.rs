//! Changelog generation

use changelogen_core::{ChangelogConfig, Commit};
use tracing::{debug, info, instrument};

use crate::contributors::collect_contributors;
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::group::group_by;
use crate::line::{format_commit, format_title};
use crate::types::{ChangelogEntry, Section};

/// Changelog generator
///
/// Holds no per-render state: the same generator can render any number of
/// commit sets, from any number of threads.
pub struct ChangelogGenerator {
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a new generator with the markdown formatter
    pub fn new() -> Self {
        Self {
            formatter: Box::new(MarkdownFormatter::new()),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Build a changelog entry from commits
    #[instrument(
        skip(self, commits, config),
        fields(commit_count = commits.len(), type_count = config.types.len())
    )]
    pub fn generate(&self, commits: &[Commit], config: &ChangelogConfig) -> ChangelogEntry {
        info!(
            from = %config.from,
            to = %config.to,
            commit_count = commits.len(),
            "generating changelog entry"
        );
        let mut entry = ChangelogEntry::new(&config.to, format_title(config));

        let groups = group_by(commits, |commit| commit.commit_type.as_str());

        // Sections follow the configured type order; newest commit first
        for (type_key, type_config) in config.types.iter() {
            let Some(group) = groups.get(type_key) else {
                continue;
            };

            let mut section = Section::new(&type_config.title);
            for commit in group.iter().rev() {
                let line = format_commit(commit, config);
                if commit.is_breaking {
                    entry.add_breaking_change(line.clone());
                }
                section.add_line(line);
            }
            entry.add_section(section);
        }

        let unconfigured = commits
            .iter()
            .filter(|commit| !config.types.contains_key(&commit.commit_type))
            .count();
        if unconfigured > 0 {
            debug!(unconfigured, "commits without a configured type left out of sections");
        }

        entry.contributors = collect_contributors(commits);

        debug!(
            section_count = entry.sections.len(),
            breaking_count = entry.breaking_changes.len(),
            contributor_count = entry.contributors.len(),
            "changelog sections built"
        );

        entry
    }

    /// Format a changelog entry to string
    pub fn format(&self, entry: &ChangelogEntry) -> String {
        self.formatter.format(entry)
    }

    /// Generate and format in one step
    #[instrument(skip(self, commits, config), fields(commit_count = commits.len()))]
    pub fn render(&self, commits: &[Commit], config: &ChangelogConfig) -> String {
        let entry = self.generate(commits, config);
        let output = self.format(&entry);
        debug!(output_len = output.len(), "changelog rendered");
        output
    }
}

impl Default for ChangelogGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelogen_core::{Reference, TypeTable};

    fn config() -> ChangelogConfig {
        ChangelogConfig::with_types(
            TypeTable::new()
                .with("feat", "Features")
                .with("fix", "Fixes"),
        )
        .with_range("v1.0.0", "v1.1.0")
    }

    #[test]
    fn test_generate_sections_in_config_order() {
        let commits = vec![
            Commit::new("fix", "fix bug"),
            Commit::new("feat", "add feature"),
        ];

        let entry = ChangelogGenerator::new().generate(&commits, &config());

        let titles: Vec<&str> = entry.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Features", "Fixes"]);
        assert_eq!(entry.version, "v1.1.0");
        assert_eq!(entry.title, "v1.1.0 (v1.0.0..v1.1.0)");
    }

    #[test]
    fn test_lines_reversed_within_section() {
        let commits = vec![
            Commit::new("feat", "first"),
            Commit::new("fix", "between"),
            Commit::new("feat", "second"),
            Commit::new("feat", "third"),
        ];

        let entry = ChangelogGenerator::new().generate(&commits, &config());
        assert_eq!(
            entry.sections[0].lines,
            vec!["  - Third", "  - Second", "  - First"]
        );
    }

    #[test]
    fn test_unconfigured_types_excluded_but_credited() {
        let commits = vec![
            Commit::new("chore", "update deps").with_author("ci bot"),
            Commit::new("feat", "add feature").with_author("jane"),
        ];

        let entry = ChangelogGenerator::new().generate(&commits, &config());

        assert_eq!(entry.sections.len(), 1);
        assert_eq!(entry.sections[0].title, "Features");
        assert_eq!(entry.contributors, vec!["Ci Bot", "Jane"]);
    }

    #[test]
    fn test_breaking_changes_follow_emission_order() {
        let commits = vec![
            Commit::new("fix", "fix a").breaking(),
            Commit::new("feat", "feat a").breaking(),
            Commit::new("feat", "feat b").breaking(),
            Commit::new("feat", "feat c"),
        ];

        let entry = ChangelogGenerator::new().generate(&commits, &config());
        assert_eq!(
            entry.breaking_changes,
            vec![
                "  - \u{26a0}\u{fe0f}  Feat b",
                "  - \u{26a0}\u{fe0f}  Feat a",
                "  - \u{26a0}\u{fe0f}  Fix a",
            ]
        );
    }

    #[test]
    fn test_breaking_unconfigured_commit_not_listed() {
        let commits = vec![Commit::new("refactor", "rewrite").breaking()];
        let entry = ChangelogGenerator::new().generate(&commits, &config());
        assert!(entry.breaking_changes.is_empty());
    }

    #[test]
    fn test_render_with_github() {
        let commits = vec![Commit::new("fix", "handle edge case")
            .with_reference(Reference::pull_request("#12"))];
        let config = config().with_github("org/repo");

        let output = ChangelogGenerator::new().render(&commits, &config);
        assert!(output.starts_with(
            "## [v1.1.0](https://github.com/org/repo/compare/v1.0.0...v1.1.0)"
        ));
        assert!(
            output.contains("  - Handle edge case ([#12](https://github.com/org/repo/pull/12))")
        );
    }

    struct TitleOnly;

    impl ChangelogFormatter for TitleOnly {
        fn format(&self, entry: &ChangelogEntry) -> String {
            entry.title.clone()
        }
    }

    #[test]
    fn test_custom_formatter() {
        let generator = ChangelogGenerator::new().with_formatter(TitleOnly);
        let output = generator.render(&[Commit::new("feat", "x")], &config());
        assert_eq!(output, "v1.1.0 (v1.0.0..v1.1.0)");
    }
}
