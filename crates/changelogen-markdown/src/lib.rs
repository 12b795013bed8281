//! Changelogen Markdown - Changelog rendering
//!
//! Turns parsed commits and a [`ChangelogConfig`](changelogen_core::ChangelogConfig)
//! into a markdown changelog: one section per configured commit type, a
//! breaking changes section and a contributors list.

pub mod contributors;
pub mod emoji;
pub mod formatter;
pub mod generator;
pub mod group;
pub mod line;
pub mod types;

pub use emoji::{GitmojiNormalizer, PassthroughNormalizer, ShortcodeNormalizer};
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use group::group_by;
pub use types::{ChangelogEntry, Section};

use changelogen_core::{ChangelogConfig, Commit};

/// Render a changelog with the default markdown formatter
pub fn render(commits: &[Commit], config: &ChangelogConfig) -> String {
    ChangelogGenerator::new().render(commits, config)
}
